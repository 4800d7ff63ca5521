//! Filename sanitization.
//!
//! Folds accented Latin vowels to ASCII and strips characters that most
//! filesystems reject in a file name.

/// Substitution table: `None` drops the character.
const SUBSTITUTIONS: &[(char, Option<&str>)] = &[
    ('á', Some("a")),
    ('à', Some("a")),
    ('ã', Some("a")),
    ('â', Some("a")),
    ('é', Some("e")),
    ('è', Some("e")),
    ('ẽ', Some("e")),
    ('ê', Some("e")),
    ('í', Some("i")),
    ('ì', Some("i")),
    ('ĩ', Some("i")),
    ('î', Some("i")),
    ('ó', Some("o")),
    ('ò', Some("o")),
    ('õ', Some("o")),
    ('ô', Some("o")),
    ('ú', Some("u")),
    ('ù', Some("u")),
    ('ũ', Some("u")),
    ('û', Some("u")),
    ('ç', Some("c")),
    ('ñ', Some("n")),
    (':', Some(" -")),
    ('>', None),
    ('<', None),
    ('?', None),
    ('!', None),
    ('*', None),
    ('#', None),
    ('/', None),
    ('\\', None),
    ('"', None),
    ('\'', None),
];

fn substitute(c: char) -> Option<Option<&'static str>> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Sanitize a name for use as a file name.
///
/// Every character is looked up independently in the substitution table, so
/// the result does not depend on the order of the table entries.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        match substitute(c) {
            Some(Some(replacement)) => out.push_str(replacement),
            Some(None) => {}
            None => out.push(c),
        }
    }

    out
}
