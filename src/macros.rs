#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! signal {
    ($name:literal, $pat:literal) => {
        $crate::SignalRule { name: $name, pattern: $crate::regex!($pat) }
    };
}
