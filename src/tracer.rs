use dec2xyz::base::tracing::*;

use colored::Colorize;

/// Writes every conversion to standard error, keeping it apart from the converted output.
#[derive(Default)]
pub struct TextTracer;

impl Tracer for TextTracer {
    fn log(&mut self, ev: Event<'_>) {
        match ev {
            Event::Converted{input, output} =>
                eprintln!("{}", Self::styled(&format!("[-] {} => {}", input.escape_ascii(),
                    output.escape_ascii()))),
            Event::Skipped{input, reason} =>
                eprintln!("{}", format!("[!] {}: {reason}", input.escape_ascii()).yellow())
        }
    }
}

impl TextTracer {
    fn styled(s: &str) -> String {
        s.dimmed().to_string()
    }
}
