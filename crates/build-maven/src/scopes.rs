use jarscope_api::Purpose;

/// Maven scope closure per purpose, replaying Maven's default classpath
/// semantics.
pub fn scopes_for(purpose: Purpose) -> &'static [&'static str] {
    match purpose {
        Purpose::Compile => &["compile", "provided", "system", "test"],
        Purpose::Runtime => &["compile", "provided", "system", "runtime"],
        Purpose::Test => &["compile", "provided", "system", "runtime", "test"],
    }
}
