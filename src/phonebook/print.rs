use colored::Colorize;
use phonebook::commands::{CmdMessage, CmdResult, ListedLine, MessageLevel};

pub(super) fn print_result(result: &CmdResult) {
    print_listed(&result.listed);
    print_messages(&result.messages);
}

fn print_listed(lines: &[ListedLine]) {
    for line in lines {
        match line {
            ListedLine::PageHeader(_) => println!("{}", line.to_string().cyan()),
            ListedLine::Record(text) => println!("{}", text),
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
