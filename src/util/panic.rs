/// Asserts that the provided block panics. The block is run behind
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), so it may borrow collections from the
/// enclosing test.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block didn't panic")
    };
    ($run:block, $msg:literal) => {{
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
