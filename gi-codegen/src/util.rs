/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// Imports shared by all generated record files. `rt` is the path of the runtime crate, e.g. `::gi`.
pub fn make_imports(rt: &TokenStream) -> TokenStream {
    quote! {
        #[allow(unused_imports)]
        use #rt::sys::{AllocKind, ManagedPtr, RawPtr};
        #[allow(unused_imports)]
        use #rt::registry::{ClassInfo, TypeKind};
        #[allow(unused_imports)]
        use #rt::obj::{GiClass, StructType};
    }
}

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

#[rustfmt::skip]
pub fn safe_ident(s: &str) -> Ident {
    // See also: https://doc.rust-lang.org/reference/keywords.html
    match s {
        // Lexer
        | "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false" | "fn" | "for" | "if"
        | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self" | "Self"
        | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while"

        // Lexer 2018+
        | "async" | "await" | "dyn"

        // Reserved
        | "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual" | "yield"

        // Reserved 2018+
        | "try"
            => format_ident!("{}_", s),

         _ => ident(s)
    }
}

/// Parses a Rust path such as `::gi` or `crate::gen` into tokens.
pub fn parse_path(path: &str) -> Option<TokenStream> {
    let valid = !path.is_empty()
        && path
            .trim_start_matches("::")
            .split("::")
            .all(|segment| is_identifier(segment));

    if !valid {
        return None;
    }

    path.parse().ok()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
