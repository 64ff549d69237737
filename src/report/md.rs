use crate::types::report::Evaluation;

pub fn to_markdown(evaluation: &Evaluation) -> String {
    let mut output = String::new();
    output.push_str("# Repository Evaluation\n\n");
    output.push_str(&format!("Score: {}/100\n\n", evaluation.score));
    output.push_str(&format!("Rating: {}\n\n", evaluation.rating));
    output.push_str(&format!("Recommendation: {}\n\n", evaluation.recommendation));

    if let Some(card) = &evaluation.breakdown {
        output.push_str("## Score Breakdown\n\n");
        for (bucket, points) in card.buckets() {
            output.push_str(&format!("- {bucket}: {points}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Details\n\n");
    match &evaluation.details {
        Some(record) => {
            for (key, value) in record.entries() {
                output.push_str(&format!("- {key}: {value}\n"));
            }
        }
        None => output.push_str("- none\n"),
    }

    output
}
