//! The `interviewsim init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("interviewsim.toml").exists() {
        println!("interviewsim.toml already exists, skipping.");
    } else {
        std::fs::write("interviewsim.toml", SAMPLE_CONFIG)?;
        println!("Created interviewsim.toml");
    }

    println!("\nNext steps:");
    println!("  1. Set ANTHROPIC_API_KEY if you want remote evaluation");
    println!("  2. Run: interviewsim questions --role data-scientist");
    println!("  3. Run: interviewsim interview --name \"Ada\" --role data-scientist");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# interviewsim configuration

# deterministic or remote-evaluation
scoring = "deterministic"
question_cap = 10
records_path = "interviewsim-records.json"

[remote]
endpoint_url = "http://localhost:3001"
# api_key = "${INTERVIEWSIM_API_KEY}"

[anthropic]
api_key = "${ANTHROPIC_API_KEY}"
model = "claude-sonnet-4-20250514"
max_tokens = 3000

[server]
port = 3001
"#;
