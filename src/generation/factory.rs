//! Factory for selecting the generator of the configured framework

use crate::generation::{Framework, NoOpGenerator, ServerGenerator};

/// Select the generator for `framework`, or the no-op generator when none is selected
pub fn select_generator(framework: Option<Framework>) -> Box<dyn ServerGenerator> {
    match framework {
        Some(framework) => Box::new(framework.generator()),
        None => {
            tracing::debug!("No server framework selected, using no-op generator");
            Box::new(NoOpGenerator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{EngineError, TemplateEngine};
    use serde_json::{Value as JsonValue, json};
    use std::io::Write;

    struct UnreachableEngine;

    impl TemplateEngine for UnreachableEngine {
        fn render_to(
            &self,
            template_name: &str,
            _data: &JsonValue,
            _out: &mut dyn Write,
        ) -> Result<(), EngineError> {
            Err(EngineError::new(format!("unexpected render of {template_name}")))
        }
    }

    #[test]
    fn test_select_generator_for_each_framework() {
        for framework in Framework::all() {
            let generator = select_generator(Some(framework));
            assert_eq!(generator.templates(), framework.template_set().templates());
        }
    }

    #[test]
    fn test_select_generator_without_framework_is_noop() {
        let generator = select_generator(None);
        assert!(generator.templates().is_empty());
        assert_eq!(
            generator
                .generate(&UnreachableEngine, &json!({ "operations": [] }))
                .unwrap(),
            ""
        );
    }
}
