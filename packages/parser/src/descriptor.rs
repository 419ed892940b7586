//! Decoding of JVM type descriptors such as `(Ljava/lang/String;[I)V`.
//!
//! Grammar, one token at a time:
//!
//! ```text
//! method  := '(' token* ')' return
//! token   := '['+ token | 'L' binary-name ';' | <one character>
//! return  := 'V' | token
//! ```
//!
//! Array dimensions are dropped from argument types. Return types keep the
//! shape produced by the historical extraction, see [`decode_return`].

use crate::ast::{Signature, TypeName};
use crate::error::DescriptorError;

type DecodeResult<T> = Result<T, DescriptorError>;

/// Decode a method descriptor into its argument and return types
pub fn decode_method_descriptor(raw: &str) -> DecodeResult<Signature> {
    if raw.is_empty() {
        return Err(DescriptorError::Empty);
    }
    if !raw.starts_with('(') {
        return Err(DescriptorError::MissingOpenParen { pos: 0 });
    }
    let close = raw
        .find(')')
        .ok_or(DescriptorError::MissingCloseParen { pos: 0 })?;

    let mut arg_types = Vec::new();
    let mut pos = 1;
    while pos < close {
        let (ty, next) = decode_token(raw, pos, close)?;
        arg_types.push(ty);
        pos = next;
    }

    let return_type = decode_return(raw, close + 1)?;

    Ok(Signature {
        raw: raw.to_string(),
        arg_types,
        return_type,
    })
}

/// Decode a single field descriptor such as `I` or `[Ljava/lang/String;`
pub fn decode_field_descriptor(raw: &str) -> DecodeResult<TypeName> {
    if raw.is_empty() {
        return Err(DescriptorError::Empty);
    }
    let (ty, next) = decode_token(raw, 0, raw.len())?;
    if next != raw.len() {
        return Err(DescriptorError::TrailingInput { pos: next });
    }
    Ok(ty)
}

/// Decode one token of `raw[pos..end]`, returning the type and the offset
/// just past it.
fn decode_token(raw: &str, pos: usize, end: usize) -> DecodeResult<(TypeName, usize)> {
    let bytes = raw.as_bytes();
    let start = pos;
    let mut pos = pos;

    while pos < end && bytes[pos] == b'[' {
        pos += 1;
    }
    if pos == end {
        return Err(DescriptorError::DanglingArray { pos: start });
    }
    let array = pos > start;

    if bytes[pos] == b'L' {
        let semi = raw[pos + 1..end]
            .find(';')
            .map(|idx| pos + 1 + idx)
            .ok_or(DescriptorError::UnterminatedObject { pos })?;
        if semi == pos + 1 {
            return Err(DescriptorError::EmptyObjectName { pos });
        }
        let name = &raw[pos + 1..semi];
        return Ok((TypeName { name: name.to_string(), array }, semi + 1));
    }

    let code = raw[pos..end]
        .chars()
        .next()
        .ok_or(DescriptorError::DanglingArray { pos: start })?;
    Ok((
        TypeName {
            name: code.to_string(),
            array,
        },
        pos + code.len_utf8(),
    ))
}

/// Decode the return segment starting at `pos`.
///
/// `V` yields `None`. The segment must be a single token. An object token keeps everything before its
/// first `L` and appends the text between that `L` and the final `;`, so
/// `Ljava/lang/String;` becomes `java/lang/String` while
/// `[Ljava/lang/String;` becomes `[java/lang/String`. Any other segment is
/// passed through unchanged, including primitive arrays such as `[I`.
pub fn decode_return(raw: &str, pos: usize) -> DecodeResult<Option<TypeName>> {
    let ret = &raw[pos..];
    if ret.is_empty() {
        return Err(DescriptorError::MissingReturn { pos });
    }
    if ret == "V" {
        return Ok(None);
    }

    let array = ret.starts_with('[');

    if ret.contains(';') {
        let marker = ret
            .find('L')
            .ok_or(DescriptorError::ReturnWithoutMarker { pos })?;
        // The segment must still be exactly one token before the name is
        // extracted, so the first `L` is the token's own marker
        let (_, next) = decode_token(raw, pos, raw.len())?;
        if next != raw.len() {
            return Err(DescriptorError::TrailingInput { pos: next });
        }
        let body = &ret[marker + 1..ret.len() - 1];
        let name = format!("{}{}", &ret[..marker], body);
        return Ok(Some(TypeName { name, array }));
    }

    // Validate the shape even though the text is passed through verbatim
    let (_, next) = decode_token(raw, pos, raw.len())?;
    if next != raw.len() {
        return Err(DescriptorError::TrailingInput { pos: next });
    }
    Ok(Some(TypeName {
        name: ret.to_string(),
        array,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sig: &Signature) -> Vec<&str> {
        sig.arg_types.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_single_object_argument_void_return() {
        for arg in ["argument", "java/lang/String", "a/b/C$Inner"] {
            let raw = format!("(L{};)V", arg);
            let sig = decode_method_descriptor(&raw).unwrap();
            assert_eq!(names(&sig), vec![arg]);
            assert_eq!(sig.return_type, None);
            assert_eq!(sig.raw, raw);
        }
    }

    #[test]
    fn test_no_arguments_object_return() {
        for ret in ["return", "java/lang/String"] {
            let raw = format!("()L{};", ret);
            let sig = decode_method_descriptor(&raw).unwrap();
            assert!(sig.arg_types.is_empty());
            assert_eq!(sig.return_type, Some(TypeName::new(ret)));
        }
    }

    #[test]
    fn test_mixed_arguments() {
        let sig = decode_method_descriptor("(IJLjava/lang/String;ZD)I").unwrap();
        assert_eq!(names(&sig), vec!["I", "J", "java/lang/String", "Z", "D"]);
        assert_eq!(sig.return_type, Some(TypeName::new("I")));
    }

    #[test]
    fn test_argument_count_matches_elements() {
        let sig = decode_method_descriptor("([I[[Ljava/lang/Object;B)V").unwrap();
        assert_eq!(sig.arg_types.len(), 3);
    }

    #[test]
    fn test_array_dimensions_are_discarded_for_arguments() {
        let one = decode_method_descriptor("([I)V").unwrap();
        let two = decode_method_descriptor("([[I)V").unwrap();
        assert_eq!(one.arg_types, vec![TypeName::array("I")]);
        assert_eq!(one.arg_types, two.arg_types);

        let objects = decode_method_descriptor("([[Ljava/lang/String;)V").unwrap();
        assert_eq!(objects.arg_types, vec![TypeName::array("java/lang/String")]);
    }

    #[test]
    fn test_primitive_array_return_passes_through() {
        let sig = decode_method_descriptor("()[I").unwrap();
        assert_eq!(sig.return_type, Some(TypeName::array("[I")));
        let sig = decode_method_descriptor("()[[D").unwrap();
        assert_eq!(sig.return_type, Some(TypeName::array("[[D")));
    }

    #[test]
    fn test_object_array_return_keeps_bracket_prefix() {
        // Brackets before the `L` survive while the `L` itself is dropped
        let sig = decode_method_descriptor("()[Ljava/lang/String;").unwrap();
        assert_eq!(sig.return_type, Some(TypeName::array("[java/lang/String")));

        let sig = decode_method_descriptor("(I)[[Ljava/util/List;").unwrap();
        assert_eq!(sig.return_type, Some(TypeName::array("[[java/util/List")));
    }

    #[test]
    fn test_object_return_uses_first_marker() {
        // Only the first `L` is treated as the marker
        let sig = decode_method_descriptor("()Lorg/Lib/Loader;").unwrap();
        assert_eq!(sig.return_type, Some(TypeName::new("org/Lib/Loader")));
    }

    #[test]
    fn test_primitive_return() {
        let sig = decode_method_descriptor("(Ljava/lang/String;)Z").unwrap();
        assert_eq!(sig.return_type, Some(TypeName::new("Z")));
    }

    #[test]
    fn test_malformed_descriptors() {
        assert_eq!(decode_method_descriptor(""), Err(DescriptorError::Empty));
        assert_eq!(
            decode_method_descriptor("I)V"),
            Err(DescriptorError::MissingOpenParen { pos: 0 })
        );
        assert_eq!(
            decode_method_descriptor("(I"),
            Err(DescriptorError::MissingCloseParen { pos: 0 })
        );
        assert_eq!(
            decode_method_descriptor("(Ljava/lang/String)V"),
            Err(DescriptorError::UnterminatedObject { pos: 1 })
        );
        assert_eq!(
            decode_method_descriptor("(L;)V"),
            Err(DescriptorError::EmptyObjectName { pos: 1 })
        );
        assert_eq!(
            decode_method_descriptor("(I[)V"),
            Err(DescriptorError::DanglingArray { pos: 2 })
        );
        assert_eq!(
            decode_method_descriptor("(I)"),
            Err(DescriptorError::MissingReturn { pos: 3 })
        );
        assert_eq!(
            decode_method_descriptor("()java/lang/String;"),
            Err(DescriptorError::ReturnWithoutMarker { pos: 2 })
        );
        assert_eq!(
            decode_method_descriptor("()Ljava/lang/String;X"),
            Err(DescriptorError::TrailingInput { pos: 20 })
        );
        assert_eq!(
            decode_method_descriptor("()II"),
            Err(DescriptorError::TrailingInput { pos: 3 })
        );
        assert_eq!(
            decode_method_descriptor("()La;Lb;"),
            Err(DescriptorError::TrailingInput { pos: 5 })
        );
        assert_eq!(
            decode_method_descriptor("()ILx;"),
            Err(DescriptorError::TrailingInput { pos: 3 })
        );
        assert_eq!(
            decode_method_descriptor("()La;;"),
            Err(DescriptorError::TrailingInput { pos: 5 })
        );
        assert_eq!(
            decode_method_descriptor("()L;"),
            Err(DescriptorError::EmptyObjectName { pos: 2 })
        );
        assert_eq!(
            decode_method_descriptor("()["),
            Err(DescriptorError::DanglingArray { pos: 2 })
        );
    }

    #[test]
    fn test_field_descriptors() {
        assert_eq!(decode_field_descriptor("I").unwrap(), TypeName::new("I"));
        assert_eq!(
            decode_field_descriptor("[Ljava/lang/String;").unwrap(),
            TypeName::array("java/lang/String")
        );
        assert_eq!(
            decode_field_descriptor("IZ"),
            Err(DescriptorError::TrailingInput { pos: 1 })
        );
        assert_eq!(decode_field_descriptor(""), Err(DescriptorError::Empty));
    }
}
