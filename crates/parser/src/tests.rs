#[cfg(test)]
mod tag_tests {
    use crate::error::ParserError;
    use crate::{parse, ParsedTag, SubTag};

    fn entries(tag: &ParsedTag) -> Vec<(SubTag, String)> {
        tag.iter().map(|(k, v)| (k, v.to_string())).collect()
    }

    #[test]
    fn parse_single_column() {
        let tag = parse("column:id").expect("parse column tag");
        assert_eq!(entries(&tag), vec![(SubTag::Column, "id".to_string())]);
    }

    #[test]
    fn parse_column_with_constraints() {
        let tag = parse("column:id,primaryKey,default:0").expect("parse tag");
        assert_eq!(tag.len(), 3);
        assert_eq!(tag.get(SubTag::Column), Some("id"));
        assert_eq!(tag.get(SubTag::PrimaryKey), Some(""));
        assert_eq!(tag.get(SubTag::Default), Some("0"));
    }

    #[test]
    fn parse_bare_relation() {
        let tag = parse("manyToOne").expect("parse relation tag");
        assert_eq!(tag.get(SubTag::ManyToOne), Some(""));
    }

    #[test]
    fn parse_empty_yields_no_entries() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \t\n").unwrap().is_empty());
    }

    #[test]
    fn parse_strips_all_whitespace() {
        let tag = parse(" column : user id ,\tnot Null ").expect("parse spaced tag");
        assert_eq!(tag.get(SubTag::Column), Some("userid"));
        assert!(tag.contains(SubTag::NotNull));
    }

    #[test]
    fn parse_payload_edges() {
        // Trailing separator means empty payload.
        let tag = parse("column:").unwrap();
        assert_eq!(tag.get(SubTag::Column), Some(""));

        // Only the first ':' splits.
        let tag = parse("check:a:b").unwrap();
        assert_eq!(tag.get(SubTag::Check), Some("a:b"));
    }

    #[test]
    fn parse_tolerates_single_trailing_comma() {
        let tag = parse("column,unique,").unwrap();
        assert_eq!(tag.len(), 2);
    }

    #[test]
    fn parse_rejects_empty_tokens() {
        assert_eq!(
            parse("column,,unique").unwrap_err(),
            ParserError::UnrecognizedSubTag(String::new())
        );
        assert_eq!(
            parse(",column").unwrap_err(),
            ParserError::UnrecognizedSubTag(String::new())
        );
        assert!(parse(",").is_err());
    }

    #[test]
    fn parse_unrecognized_mentions_token() {
        let err = parse("column:id,asdf").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unrecognized"), "message was: {msg}");
        assert!(msg.contains("asdf"), "message was: {msg}");
    }

    #[test]
    fn parse_duplicate_mentions_keyword() {
        let err = parse("column:id,column:name").unwrap_err();
        assert_eq!(err, ParserError::DuplicateSubTag("column".into()));
        let msg = err.to_string();
        assert!(msg.contains("duplicate"), "message was: {msg}");
        assert!(msg.contains("column"), "message was: {msg}");
    }

    #[test]
    fn parse_checks_each_token_in_order() {
        // A repeated valid keyword is a duplicate.
        assert_eq!(
            parse("unique,unique").unwrap_err(),
            ParserError::DuplicateSubTag("unique".into())
        );
        // An unknown keyword fails on its first occurrence.
        assert_eq!(
            parse("asdf,asdf").unwrap_err(),
            ParserError::UnrecognizedSubTag("asdf".into())
        );
    }

    #[test]
    fn parse_odd_inputs_fail_only_on_keywords() {
        for raw in [",", "::", ",,,", "é,column", ":x", "column::"] {
            match parse(raw) {
                Ok(_)
                | Err(ParserError::UnrecognizedSubTag(_))
                | Err(ParserError::DuplicateSubTag(_)) => {}
                Err(other) => panic!("unexpected error for {raw:?}: {other:?}"),
            }
        }
        assert_eq!(parse("column::").unwrap().get(SubTag::Column), Some(":"));
    }

    #[test]
    fn parse_reports_first_offending_token() {
        assert_eq!(
            parse("foo,column,column").unwrap_err(),
            ParserError::UnrecognizedSubTag("foo".into())
        );
    }

    #[test]
    fn parse_is_idempotent_on_serialization() {
        let cases = [
            "column:id",
            "column:id,primaryKey,default:0",
            "manyToOne",
            "oneToMany:owner_id,column,check:a>0,foreignKey:users",
            "index,unique,notNull,column:created_at",
            "",
        ];
        for raw in cases {
            let tag = parse(raw).unwrap();
            let reparsed = parse(&tag.to_string()).unwrap();
            assert_eq!(tag, reparsed, "round trip failed for {raw:?}");
        }
    }

    #[test]
    fn parse_any_order_gives_same_mapping() {
        let forward = parse("column:id,primaryKey,default:0").unwrap();
        let reversed = parse("default:0,primaryKey,column:id").unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn parse_full_vocabulary() {
        let raw = SubTag::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let tag = parse(&raw).unwrap();
        assert_eq!(tag.len(), SubTag::ALL.len());
    }
}
