use anyhow::Result;
use regex::Regex;

/// Compiled matchers for one module name.
pub(crate) struct UsagePatterns {
    /// Any line referencing the module by specifier, subpath imports
    /// included.
    pub(crate) references: Vec<Regex>,
    /// Patterns whose first capture is the identifier (or brace list of
    /// identifiers) bound to the module.
    pub(crate) bindings: Vec<Regex>,
}

pub(crate) fn build_patterns(module: &str) -> Result<UsagePatterns> {
    let name = regex::escape(module);
    let spec = format!(r#"['"]{name}(?:/[^'"]*)?['"]"#);

    let references = vec![
        Regex::new(&format!(r"require\s*\(\s*{spec}\s*\)"))?,
        Regex::new(&format!(r"\bimport\s*\(\s*{spec}\s*\)"))?,
        Regex::new(&format!(r"\bimport\s+[^;]*?\bfrom\s*{spec}"))?,
        Regex::new(&format!(r"\bexport\s+[^;]*?\bfrom\s*{spec}"))?,
        Regex::new(&format!(r"\bimport\s+{spec}"))?,
        // Continuation line of an import statement split across lines.
        Regex::new(&format!(r"^\s*\}}?\s*from\s*{spec}"))?,
    ];

    let bindings = vec![
        Regex::new(&format!(r"(?:const|let|var)\s+(\w+)\s*=\s*require\s*\(\s*{spec}\s*\)"))?,
        Regex::new(&format!(
            r"(?:const|let|var)\s*\{{([^}}]+)\}}\s*=\s*require\s*\(\s*{spec}\s*\)"
        ))?,
        Regex::new(&format!(r"\bimport\s+(\w+)\s+from\s*{spec}"))?,
        Regex::new(&format!(r"\bimport\s+(\w+)\s*,[^;]*\bfrom\s*{spec}"))?,
        Regex::new(&format!(r"\bimport\s*\{{([^}}]+)\}}\s*from\s*{spec}"))?,
        Regex::new(&format!(r"\bimport\s*\*\s*as\s+(\w+)\s*from\s*{spec}"))?,
    ];

    Ok(UsagePatterns { references, bindings })
}

/// Split a captured binding group ("a, b as c") into plain identifiers.
pub(crate) fn parse_binding_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let token = match part.rsplit_once(" as ") {
                Some((_, alias)) => alias,
                None => part,
            }
            .trim();
            let is_ident = !token.is_empty()
                && token.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
            is_ident.then(|| token.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_any(patterns: &[Regex], line: &str) -> bool {
        patterns.iter().any(|re| re.is_match(line))
    }

    #[test]
    fn test_reference_patterns() {
        let p = build_patterns("lodash").unwrap();
        assert!(matches_any(&p.references, "const _ = require('lodash');"));
        assert!(matches_any(&p.references, r#"import _ from "lodash";"#));
        assert!(matches_any(&p.references, "import { merge } from 'lodash';"));
        assert!(matches_any(&p.references, "const chunk = await import('lodash');"));
        assert!(matches_any(&p.references, "import 'lodash';"));
        assert!(matches_any(&p.references, "export { merge } from 'lodash';"));
        assert!(matches_any(&p.references, "import debounce from 'lodash/debounce';"));
    }

    #[test]
    fn test_reference_patterns_reject_other_modules() {
        let p = build_patterns("lodash").unwrap();
        assert!(!matches_any(&p.references, "const x = require('lodash-es');"));
        assert!(!matches_any(&p.references, "import x from 'not-lodash';"));
        assert!(!matches_any(&p.references, "// lodash is great"));
    }

    #[test]
    fn test_scoped_module_patterns() {
        let p = build_patterns("@babel/core").unwrap();
        assert!(matches_any(&p.references, "const babel = require('@babel/core');"));
        assert!(matches_any(&p.references, "import { transform } from '@babel/core';"));
    }

    #[test]
    fn test_binding_capture_default_import() {
        let p = build_patterns("lodash").unwrap();
        let line = "import _ from 'lodash';";
        let captured: Vec<String> = p
            .bindings
            .iter()
            .filter_map(|re| re.captures(line))
            .flat_map(|caps| parse_binding_list(&caps[1]))
            .collect();
        assert_eq!(captured, vec!["_"]);
    }

    #[test]
    fn test_binding_capture_destructured_require() {
        let p = build_patterns("lodash").unwrap();
        let line = "const { merge, cloneDeep: clone } = require('lodash');";
        let captured: Vec<String> = p
            .bindings
            .iter()
            .filter_map(|re| re.captures(line))
            .flat_map(|caps| parse_binding_list(&caps[1]))
            .collect();
        // "cloneDeep: clone" is not a plain identifier and is dropped.
        assert_eq!(captured, vec!["merge"]);
    }

    #[test]
    fn test_parse_binding_list_aliases() {
        assert_eq!(parse_binding_list("merge, cloneDeep as clone"), vec!["merge", "clone"]);
        assert_eq!(parse_binding_list(" a "), vec!["a"]);
        assert!(parse_binding_list("{ nested }").is_empty());
    }
}
