use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::assistant::Session;
use crate::core::SessionConfig;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = SessionConfig::default();
    let mut session = Session::builder(config).build();

    // The session starts with the copilot's greeting
    if let Some(greeting) = session.messages().last() {
        println!("{}", greeting.text);
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                session.submit(line.as_str()).await;
                // Rejected input (blank lines) appends nothing, so only
                // print when the newest turn is an assistant reply
                if let Some(reply) = session.messages().last()
                    && reply.role == crate::assistant::Role::Assistant
                {
                    println!("{}", reply.text);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
