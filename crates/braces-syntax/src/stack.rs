//! Stack growth for the recursive tree walks.
//!
//! Nesting depth and chain length are controlled by the pattern, so every
//! recursive operation over a tree goes through [`ensure_sufficient_stack`].

/// If less than this remains, the stack is grown.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
    }

    #[test]
    fn deep_recursion() {
        assert_eq!(depth(200_000), 200_000);
    }
}
