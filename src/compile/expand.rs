//! Expansion passes: fold repeat multipliers, then expand ranges into frames.

use std::iter::Peekable;
use std::vec::IntoIter;

use super::command::FrameCommand;
use super::diagnostics::Diagnostic;

/// Pass 1: fold each `x` multiplier into the preceding number.
///
/// `1x2x3` leaves the 1 with a repeat count of 6; `x0` zeroes it. The right
/// operand is consumed before the left side is checked, so a dangling
/// extender like `x5` swallows the 5 and the group yields nothing.
pub(super) fn resolve_extenders(
    commands: Vec<FrameCommand>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<FrameCommand> {
    let mut out: Vec<FrameCommand> = Vec::with_capacity(commands.len());
    let mut iter = commands.into_iter().peekable();

    while let Some(curr) = iter.next() {
        if curr != FrameCommand::Extender {
            out.push(curr);
            continue;
        }
        let Some((multiplier, _)) = take_right_operand(&mut iter, diagnostics) else {
            continue;
        };
        match out.last_mut() {
            Some(FrameCommand::Number { times, .. }) => *times *= multiplier,
            Some(_) => diagnostics.push(Diagnostic::MissingLeftOperand),
            None => diagnostics.push(Diagnostic::MissingLeftOperandAtStart),
        }
    }

    out
}

/// Pass 2: expand ranges and flatten everything into concrete frames.
///
/// A number followed by a range marker becomes the range's left operand and
/// is not emitted on its own: `1-3` is `2,3`. The right operand is emitted
/// as the strictly-between run plus itself repeated `times` times, and then
/// serves as the left operand of any chained range. Separators reset the
/// group, so operators cannot reach across a comma.
pub(super) fn expand_ranges(
    commands: Vec<FrameCommand>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<u32> {
    let mut frames = Vec::new();
    // Last number of the current group, usable as a range's left operand.
    let mut prev: Option<u32> = None;
    // A number waiting to be emitted bare, unless a range claims it first.
    let mut pending: Option<(u32, u32)> = None;
    let mut iter = commands.into_iter().peekable();

    while let Some(curr) = iter.next() {
        match curr {
            FrameCommand::Number { value, times } => {
                if let Some((v, t)) = pending.take() {
                    push_frame(&mut frames, v, t, diagnostics);
                }
                pending = Some((value, times));
                prev = Some(value);
            }
            FrameCommand::Separator => {
                if let Some((v, t)) = pending.take() {
                    push_frame(&mut frames, v, t, diagnostics);
                }
                prev = None;
            }
            FrameCommand::Range => {
                let Some((to, times)) = take_right_operand(&mut iter, diagnostics) else {
                    continue;
                };
                let Some(from) = prev else {
                    diagnostics.push(Diagnostic::MissingLeftOperandAtStart);
                    continue;
                };
                // The left operand belongs to the range now.
                pending = None;
                if from == to {
                    // The right operand's repeat count is dropped here; the
                    // notation asks authors to use a comma instead.
                    diagnostics.push(Diagnostic::SelfRange { value: to });
                } else {
                    push_range(&mut frames, from, to, times, diagnostics);
                }
                prev = Some(to);
            }
            FrameCommand::Extender => {
                // Resolved by pass 1; nothing can reach here.
                log::error!("extender command survived extender resolution");
            }
        }
    }

    if let Some((v, t)) = pending {
        push_frame(&mut frames, v, t, diagnostics);
    }

    frames
}

/// Dequeue a binary operator's right operand, returning `(value, times)`.
///
/// Check order matters and is observable: the queue end and the operand
/// kind are checked (and the operand consumed) before the caller looks at
/// its left side.
fn take_right_operand(
    iter: &mut Peekable<IntoIter<FrameCommand>>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<(u32, u32)> {
    match iter.peek() {
        None => {
            diagnostics.push(Diagnostic::MissingRightOperandAtEnd);
            None
        }
        Some(&FrameCommand::Number { value, times }) => {
            iter.next();
            Some((value, times))
        }
        Some(_) => {
            diagnostics.push(Diagnostic::MissingRightOperand);
            None
        }
    }
}

fn push_frame(frames: &mut Vec<u32>, value: u32, times: u32, diagnostics: &mut Vec<Diagnostic>) {
    if value == 0 {
        if times > 0 {
            diagnostics.push(Diagnostic::ZeroFrame);
        }
        return;
    }
    frames.extend(std::iter::repeat(value).take(times as usize));
}

fn push_range(
    frames: &mut Vec<u32>,
    from: u32,
    to: u32,
    times: u32,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // Everything strictly between, walking away from `from`...
    if from < to {
        frames.extend(from + 1..to);
    } else {
        frames.extend((to + 1..from).rev());
    }
    // ...then the terminal with its own repeat count, so `1-5x0` can drop
    // the endpoint entirely.
    push_frame(frames, to, times, diagnostics);
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    fn run(source: &str) -> (Vec<u32>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let commands = tokenize(source, &mut diagnostics);
        let commands = resolve_extenders(commands, &mut diagnostics);
        let frames = expand_ranges(commands, &mut diagnostics);
        (frames, diagnostics)
    }

    #[test]
    fn test_extender_multiplies_times() {
        let mut diagnostics = Vec::new();
        let commands = tokenize("1x2x3", &mut diagnostics);
        let commands = resolve_extenders(commands, &mut diagnostics);
        assert_eq!(commands, vec![FrameCommand::Number { value: 1, times: 6 }]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_extender_without_left_operand_eats_right() {
        let (frames, diagnostics) = run("x5");
        assert!(frames.is_empty());
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::MissingNumber,
                Diagnostic::MissingLeftOperandAtStart
            ]
        );
    }

    #[test]
    fn test_extender_across_separator_rejected() {
        let (frames, diagnostics) = run("5,x2");
        assert_eq!(frames, vec![5]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MissingNumber, Diagnostic::MissingLeftOperand]
        );
    }

    #[test]
    fn test_extender_at_end_of_input() {
        let (frames, diagnostics) = run("2x");
        assert_eq!(frames, vec![2]);
        assert_eq!(diagnostics, vec![Diagnostic::MissingRightOperandAtEnd]);
    }

    #[test]
    fn test_ascending_range_is_left_exclusive() {
        let (frames, diagnostics) = run("1-5");
        assert_eq!(frames, vec![2, 3, 4, 5]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_descending_range() {
        let (frames, diagnostics) = run("5-1");
        assert_eq!(frames, vec![4, 3, 2, 1]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_range_terminal_repeat_count() {
        let (frames, _) = run("1-5x1");
        assert_eq!(frames, vec![2, 3, 4, 5]);
        let (frames, _) = run("1-5x0");
        assert_eq!(frames, vec![2, 3, 4]);
        let (frames, _) = run("1-3x2");
        assert_eq!(frames, vec![2, 3, 3]);
    }

    #[test]
    fn test_chained_ranges_share_endpoints() {
        let (frames, diagnostics) = run("1-3-1");
        assert_eq!(frames, vec![2, 3, 2, 1]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_self_range_emits_nothing() {
        let (frames, diagnostics) = run("5-5");
        assert!(frames.is_empty());
        assert_eq!(diagnostics, vec![Diagnostic::SelfRange { value: 5 }]);
    }

    #[test]
    fn test_self_range_endpoint_still_chains() {
        let (frames, diagnostics) = run("5-5-7");
        assert_eq!(frames, vec![6, 7]);
        assert_eq!(diagnostics, vec![Diagnostic::SelfRange { value: 5 }]);
    }

    #[test]
    fn test_separator_isolates_groups() {
        let (frames, diagnostics) = run("1,2,3");
        assert_eq!(frames, vec![1, 2, 3]);
        assert!(diagnostics.is_empty());

        let (frames, diagnostics) = run("1,-3");
        assert_eq!(frames, vec![1]);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::MissingNumber,
                Diagnostic::MissingLeftOperandAtStart
            ]
        );
    }

    #[test]
    fn test_zero_frame_skipped() {
        let (frames, diagnostics) = run("0");
        assert!(frames.is_empty());
        assert_eq!(diagnostics, vec![Diagnostic::ZeroFrame]);

        let (frames, diagnostics) = run("3-0");
        assert_eq!(frames, vec![2, 1]);
        assert_eq!(diagnostics, vec![Diagnostic::ZeroFrame]);
    }
}
