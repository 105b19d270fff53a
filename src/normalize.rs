use strum::{Display, EnumString};

/// Document served when a URI names a directory
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// How a request URI gets rewritten before origin lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Rewrite {
    /// URI already ends with `/`
    AppendDocument,
    /// Leaf segment has no extension, so it is a directory missing its slash
    AppendSlashAndDocument,
    /// Leaf segment looks like a file name
    Unchanged,
}

impl Rewrite {
    /// Decides the rewrite from the final path segment only
    pub fn classify(uri: &str) -> Self {
        if uri.ends_with('/') {
            return Rewrite::AppendDocument;
        }

        let leaf = uri.rsplit('/').next().unwrap_or(uri);
        if leaf.contains('.') {
            Rewrite::Unchanged
        } else {
            Rewrite::AppendSlashAndDocument
        }
    }

    pub fn apply(self, uri: &str) -> String {
        match self {
            Rewrite::AppendDocument => format!("{uri}{DEFAULT_DOCUMENT}"),
            Rewrite::AppendSlashAndDocument => format!("{uri}/{DEFAULT_DOCUMENT}"),
            Rewrite::Unchanged => uri.to_string(),
        }
    }
}

/// Normalizes a request URI so directory paths resolve to their default document
pub fn normalize(uri: &str) -> String {
    Rewrite::classify(uri).apply(uri)
}

/// Rewrites `uri` in place and reports which rewrite was applied
pub fn normalize_in_place(uri: &mut String) -> Rewrite {
    let rewrite = Rewrite::classify(uri);
    match rewrite {
        Rewrite::AppendDocument => uri.push_str(DEFAULT_DOCUMENT),
        Rewrite::AppendSlashAndDocument => {
            uri.push('/');
            uri.push_str(DEFAULT_DOCUMENT);
        }
        Rewrite::Unchanged => {}
    }
    rewrite
}
