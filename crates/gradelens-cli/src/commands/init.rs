//! The `gradelens init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradelens.toml
    if std::path::Path::new("gradelens.toml").exists() {
        println!("gradelens.toml already exists, skipping.");
    } else {
        std::fs::write("gradelens.toml", SAMPLE_CONFIG)?;
        println!("Created gradelens.toml");
    }

    // Create a sample dataset
    std::fs::create_dir_all("data")?;
    let sample_path = std::path::Path::new("data/grades.csv");
    if sample_path.exists() {
        println!("data/grades.csv already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_DATASET)?;
        println!("Created data/grades.csv");
    }

    println!("\nNext steps:");
    println!("  1. Replace data/grades.csv with your own grades export");
    println!("  2. Run: gradelens validate");
    println!("  3. Run: gradelens stats");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradelens configuration

# Path to the grades CSV: ten binary answer columns, then the total.
dataset = "data/grades.csv"

# Where `gradelens report` writes its output.
output_dir = "./gradelens-results"

# Default output format for the query commands: "table" or "json".
default_format = "table"
"#;

const SAMPLE_DATASET: &str = "\
Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total
1,1,0,1,0,1,1,1,1,0,7
1,1,0,1,1,1,0,1,0,0,6
0,1,1,1,0,1,0,1,1,0,6
1,1,0,1,0,1,0,1,1,1,7
1,1,1,1,1,1,1,0,1,1,9
1,1,1,1,0,1,0,1,0,0,6
1,1,1,0,0,1,0,1,0,1,6
1,1,1,1,1,0,1,1,0,1,8
1,1,0,1,1,1,0,1,0,0,6
1,1,0,1,1,1,1,1,1,0,8
1,1,1,1,1,1,1,1,1,0,9
1,0,1,1,0,0,0,1,1,1,6
";
