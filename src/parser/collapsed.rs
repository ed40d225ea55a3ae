//! Collapsed stack format parsing.
//!
//! Collapsed stacks are the common interchange format for profile data.
//! Format: "parent;child;grandchild weight", one stack per line.
//!
//! Example: "main;execute_tx;storage_read 1000"
//! This means: main called execute_tx which called storage_read, with a
//! total weight of 1000 attributed to that path.

use crate::parser::schema::FrameNode;
use crate::utils::error::ParseError;
use log::debug;

/// A single parsed stack line
#[derive(Debug, Clone, PartialEq)]
pub struct StackLine {
    /// Frame names from outermost to innermost
    pub frames: Vec<String>,

    /// Weight attributed to this path
    pub weight: f64,
}

/// Parse collapsed stack text into stack lines
///
/// **Public** - main entry point for collapsed input
///
/// # Arguments
/// * `input` - Full text of a collapsed stack file
///
/// # Returns
/// One `StackLine` per non-blank input line, in input order
///
/// # Errors
/// * `ParseError::MalformedLine` - missing or non-numeric weight, empty
///   frame list, or a negative/non-finite weight
/// * `ParseError::EmptyInput` - no stacks in the input
pub fn parse_collapsed(input: &str) -> Result<Vec<StackLine>, ParseError> {
    let mut lines = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (stack, weight) =
            line.rsplit_once(char::is_whitespace)
                .ok_or_else(|| ParseError::MalformedLine {
                    line: number + 1,
                    reason: "expected '<stack> <weight>'".to_string(),
                })?;

        let weight: f64 = weight.parse().map_err(|_| ParseError::MalformedLine {
            line: number + 1,
            reason: format!("weight '{weight}' is not a number"),
        })?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(ParseError::MalformedLine {
                line: number + 1,
                reason: format!("weight {weight} must be finite and >= 0"),
            });
        }

        let frames: Vec<String> = stack
            .trim()
            .split(';')
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        if frames.is_empty() {
            return Err(ParseError::MalformedLine {
                line: number + 1,
                reason: "empty stack".to_string(),
            });
        }

        lines.push(StackLine { frames, weight });
    }

    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    debug!("Parsed {} collapsed stack lines", lines.len());
    Ok(lines)
}

/// Fold stack lines into a weighted frame tree
///
/// **Public** - second half of collapsed ingestion
///
/// Weights accumulate along each path: every frame's value is the sum of
/// the weights of all stacks passing through it, and the synthetic root
/// carries the grand total. Siblings keep first-seen order, which is what
/// the as-given layout strategy later reproduces.
pub fn build_tree(lines: &[StackLine], root_name: &str) -> FrameNode {
    let mut root = FrameNode::new(root_name, 0.0);

    for line in lines {
        root.value += line.weight;
        let mut node = &mut root;
        for frame in &line.frames {
            // Linear scan keeps encounter order; child lists are small.
            let position = node.children.iter().position(|c| &c.name == frame);
            let index = match position {
                Some(index) => index,
                None => {
                    node.children.push(FrameNode::new(frame.clone(), 0.0));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
            node.value += line.weight;
        }
    }

    debug!(
        "Built frame tree: total weight {}, {} top-level frames",
        root.value,
        root.children.len()
    );

    root
}
