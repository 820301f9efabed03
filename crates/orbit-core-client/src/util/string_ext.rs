// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub trait StringExt {
    /// First letter of up to two name words, uppercased. "Maya Patel"
    /// becomes "MP".
    fn initials(&self) -> String;

    /// `@` followed by the lowercased name with whitespace stripped.
    /// "Maya Patel" becomes "@mayapatel".
    fn as_handle(&self) -> String;
}

impl<T> StringExt for T
where
    T: AsRef<str>,
{
    fn initials(&self) -> String {
        self.as_ref()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    fn as_handle(&self) -> String {
        let name = self
            .as_ref()
            .split_whitespace()
            .collect::<String>()
            .to_lowercase();
        format!("@{name}")
    }
}
