//! Enclosing-type tracking by brace counting.
//!
//! Braces are counted character by character with no awareness of string
//! literals or comments, so `"{"` in a literal shifts the depth. A type whose
//! body opens and closes on its own line (`struct Empty {}`) is pushed at the
//! depth it started from and stays on the stack until the depth drops below
//! it.

#[derive(Debug, Default)]
pub struct NestingTracker {
    stack: Vec<(String, i64)>,
    depth: i64,
}

impl NestingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost enclosing type, as of the end of the previous line.
    pub fn parent(&self) -> Option<&str> {
        self.stack.last().map(|(name, _)| name.as_str())
    }

    #[cfg(test)]
    fn depth(&self) -> i64 {
        self.depth
    }

    /// Apply one line's braces. `declared_type` is the type name matched on
    /// this line, if any.
    pub fn update(&mut self, line: &str, declared_type: Option<&str>) {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        self.depth += opens - closes;

        if let Some(name) = declared_type {
            if opens > 0 {
                self.stack.push((name.to_string(), self.depth));
            }
        }

        while self
            .stack
            .last()
            .is_some_and(|&(_, pushed_at)| self.depth < pushed_at)
        {
            self.stack.pop();
        }
    }
}
