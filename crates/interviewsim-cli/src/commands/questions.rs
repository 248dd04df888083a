//! The `interviewsim questions` command.

use anyhow::Result;

use interviewsim_core::model::Role;
use interviewsim_core::questions::questions_for;

pub fn execute(role: Role) -> Result<()> {
    println!("{} questions:", role.title());
    for (i, question) in questions_for(role).iter().enumerate() {
        println!("{:>2}. {question}", i + 1);
    }
    Ok(())
}
