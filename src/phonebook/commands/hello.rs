use super::{CmdMessage, CmdResult};

pub fn run(name: Option<&str>) -> CmdResult {
    let greeting = match name {
        Some(name) => format!("Hello {}, how can I help you?", name),
        None => "How can I help you?".to_string(),
    };
    CmdResult::default().with_message(CmdMessage::info(greeting))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name_when_given() {
        assert_eq!(run(Some("Ann")).to_text(), "Hello Ann, how can I help you?\n");
        assert_eq!(run(None).to_text(), "How can I help you?\n");
    }
}
