//! Scripted interview questions per role.

use crate::model::Role;

const DATA_SCIENTIST_QUESTIONS: &[&str] = &[
    "What initially drew you to data science, and how has your role evolved over the years?",
    "Can you walk me through a recent project where you had to solve a complex data problem? What was your approach?",
    "How do you approach feature engineering for a machine learning model? Can you give me a specific example?",
    "Have you worked in large-scale enterprise environments? What unique challenges did you face with data governance or compliance?",
    "Tell me about a time you helped mentor someone or shared knowledge with your team. How do you approach knowledge transfer?",
    "What's the most recent skill or concept you've learned, and how have you applied it in your work?",
    "Describe a time when a project didn't go as planned. What did you learn, and how did you adapt?",
    "How do you balance technical innovation with business constraints when stakeholders have different priorities?",
];

const DATA_ENGINEER_QUESTIONS: &[&str] = &[
    "What drew you to data engineering, and how has the field evolved since you started?",
    "Can you walk me through a data pipeline you've built recently? What challenges did you encounter?",
    "How do you ensure data quality and integrity in your workflows, especially at enterprise scale?",
    "Can you explain your experience with batch vs. stream processing? When would you choose each approach?",
    "Have you worked with data governance or compliance frameworks? How do you ensure your pipelines meet these requirements?",
    "Tell me about a time you mentored a junior engineer or led a knowledge-sharing initiative. What was your approach?",
    "What's the most recent technology or tool you've learned, and how have you integrated it into your work?",
    "Describe a time when you had to optimize a poorly performing data system. What was your methodology?",
];

/// The ordered question list for a role. Never empty.
pub fn questions_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::DataScientist => DATA_SCIENTIST_QUESTIONS,
        Role::DataEngineer => DATA_ENGINEER_QUESTIONS,
    }
}
