/// Text handed to a sharing integration once a game is over.
pub fn share_text(score: u32) -> String {
    format!(
        "I scored {} points in Prismatch! Can you beat it?",
        group_thousands(score)
    )
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
