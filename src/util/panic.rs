/// Asserts that running `$run` panics, e.g. indexing past the end of a list or replacing the top of
/// an empty stack. The panic is caught, so the test carries on afterwards.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "the block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
