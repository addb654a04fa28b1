//! Namespace merging for one iteration.
//!
//! The template sees a single flat namespace assembled from three sources.
//! Shadowing is explicit and shallow: later inserts replace earlier values
//! wholesale, nested mappings are never merged recursively.

use std::collections::BTreeMap;

use minijinja::Value;
use serde_yaml::Mapping;

use super::data::REPEAT_KEY;

/// Merge the base record, one iteration's overrides, and the synthesized
/// loop context into the namespace a template is evaluated against.
///
/// Precedence, highest to lowest: overrides, the loop context (for the
/// reserved key only), the base record. The reserved key always carries the
/// synthesized context; whatever the record held there (usually the repeat
/// collection itself) is shadowed so templates can reference `loop.index`
/// in every iteration.
pub fn merge_namespace(base: &Mapping, overrides: Option<&Mapping>, loop_ctx: Value) -> Value {
    let mut namespace: BTreeMap<String, Value> = BTreeMap::new();

    insert_fields(&mut namespace, base);
    namespace.insert(REPEAT_KEY.to_string(), loop_ctx);
    if let Some(overrides) = overrides {
        insert_fields(&mut namespace, overrides);
    }

    namespace.into_iter().collect()
}

fn insert_fields(namespace: &mut BTreeMap<String, Value>, fields: &Mapping) {
    for (key, value) in fields {
        // Only string keys are addressable from a template.
        if let Some(key) = key.as_str() {
            namespace.insert(key.to_string(), Value::from_serialize(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::loop_ctx::LoopContext;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_base_loop_key_is_always_the_synthesized_context() {
        let base = mapping("loop:\n  - a: 1\n  - a: 2");
        let merged = merge_namespace(&base, None, LoopContext::build(0, 2).value());

        let loop_value = merged.get_attr("loop").unwrap();
        assert_eq!(loop_value.get_attr("index").unwrap(), Value::from(1));
        assert_eq!(loop_value.get_attr("first").unwrap(), Value::from(true));
    }

    #[test]
    fn test_override_shadows_base() {
        let base = mapping("from: Julie Lights\ndate: 1/1/2000");
        let overrides = mapping("date: 3/14/2012");
        let merged = merge_namespace(&base, Some(&overrides), LoopContext::build(0, 1).value());

        assert_eq!(merged.get_attr("date").unwrap(), Value::from("3/14/2012"));
        assert_eq!(merged.get_attr("from").unwrap(), Value::from("Julie Lights"));
    }

    #[test]
    fn test_override_loop_key_wins_over_context() {
        // Documented precedence: overrides shadow even the reserved key.
        let base = mapping("from: x");
        let overrides = mapping("loop: custom");
        let merged = merge_namespace(&base, Some(&overrides), LoopContext::build(0, 1).value());

        assert_eq!(merged.get_attr("loop").unwrap(), Value::from("custom"));
    }

    #[test]
    fn test_nested_mappings_replaced_wholesale() {
        let base = mapping("cfg:\n  a: 1\n  b: 2");
        let overrides = mapping("cfg:\n  a: 9");
        let merged = merge_namespace(&base, Some(&overrides), LoopContext::build(0, 1).value());

        let cfg = merged.get_attr("cfg").unwrap();
        assert_eq!(cfg.get_attr("a").unwrap(), Value::from(9));
        assert!(cfg.get_attr("b").unwrap().is_undefined());
    }

    #[test]
    fn test_non_string_keys_are_skipped() {
        let base = mapping("1: numeric\nname: ok");
        let merged = merge_namespace(&base, None, LoopContext::build(0, 1).value());

        assert_eq!(merged.get_attr("name").unwrap(), Value::from("ok"));
        assert!(merged.get_attr("1").unwrap().is_undefined());
    }
}
