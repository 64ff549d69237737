use crate::types::report::Evaluation;

pub fn to_text(evaluation: &Evaluation) -> String {
    let mut output = String::new();
    output.push_str(&format!("Score: {}/100\n", evaluation.score));
    output.push_str(&format!("Rating: {}\n", evaluation.rating));
    output.push_str(&format!("Recommendation: {}\n", evaluation.recommendation));
    output.push_str("\nDetails:\n");
    if let Some(record) = &evaluation.details {
        for (key, value) in record.entries() {
            output.push_str(&format!("  {key}: {value}\n"));
        }
    }
    output
}
