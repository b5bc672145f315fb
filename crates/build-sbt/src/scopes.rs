use jarscope_api::Purpose;

/// sbt configuration names per purpose.
///
/// The test configuration feeds the compile purpose too, keeping test
/// sources analyzable.
pub fn scopes_for(purpose: Purpose) -> &'static [&'static str] {
    match purpose {
        Purpose::Compile => &["compile", "default", "provided", "optional", "test"],
        Purpose::Runtime => &["compile", "default", "provided", "optional", "runtime"],
        Purpose::Test => &["compile", "default", "provided", "optional", "runtime", "test"],
    }
}
