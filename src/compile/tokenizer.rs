//! Tokenization of notation strings into frame commands.

use super::command::FrameCommand;
use super::diagnostics::Diagnostic;

/// Scan a trimmed notation string into a command list.
///
/// Digits accumulate into a pending number; `x`, `-`/`t`, and `,` flush the
/// pending number and emit their operator. An operator with no pending
/// digits raises [`Diagnostic::MissingNumber`] but is still emitted, so the
/// expansion passes see the same shape the author wrote. Characters outside
/// the alphabet are skipped with a diagnostic.
pub(super) fn tokenize(source: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<FrameCommand> {
    let mut commands = Vec::new();
    let mut digits = String::new();

    for c in source.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'x' => {
                flush_number(&mut digits, &mut commands, diagnostics);
                commands.push(FrameCommand::Extender);
            }
            '-' | 't' => {
                flush_number(&mut digits, &mut commands, diagnostics);
                commands.push(FrameCommand::Range);
            }
            ',' => {
                flush_number(&mut digits, &mut commands, diagnostics);
                commands.push(FrameCommand::Separator);
            }
            _ => diagnostics.push(Diagnostic::UnrecognizedCharacter(c)),
        }
    }

    // Trailing digits flush without an operator; nothing pending is fine.
    if !digits.is_empty() {
        flush_number(&mut digits, &mut commands, diagnostics);
    }

    commands
}

fn flush_number(
    digits: &mut String,
    commands: &mut Vec<FrameCommand>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if digits.is_empty() {
        diagnostics.push(Diagnostic::MissingNumber);
        return;
    }
    match digits.parse::<u32>() {
        Ok(value) => commands.push(FrameCommand::Number { value, times: 1 }),
        Err(_) => diagnostics.push(Diagnostic::NumberOverflow),
    }
    digits.clear();
}
