use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path) -> Result<(), String> {
    let host = super::open_host(dir)?;
    let messages = host.chat.messages()?;

    if messages.is_empty() {
        println!("  No messages yet.");
        return Ok(());
    }

    for message in &messages {
        println!(
            "  {} {}",
            message.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
            format!("to {}", message.whisper.join(", ")).dimmed()
        );
        for line in message.content.lines() {
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}
