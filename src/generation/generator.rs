//! Template-set generators
//!
//! A [`TemplateGenerator`] renders each template of its set in declared order
//! and joins the fragments with a single newline. The first failing template
//! aborts the run. [`NoOpGenerator`] stands in when no framework is selected.

use serde_json::Value as JsonValue;
use std::io::BufWriter;

use crate::generation::{Framework, GenerationError, ServerGenerator, TemplateEngine, TemplateSet};

/// Separator placed between rendered fragments (never after the last one)
pub const FRAGMENT_SEPARATOR: &str = "\n";

/// Renders a fixed, ordered template set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGenerator {
    templates: TemplateSet,
}

impl TemplateGenerator {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    pub fn template_set(&self) -> &TemplateSet {
        &self.templates
    }

    /// Go standard library `net/http` server
    pub fn std_http() -> Self {
        Self::new(Framework::StdHttp.template_set())
    }

    pub fn gin() -> Self {
        Self::new(Framework::Gin.template_set())
    }

    pub fn iris() -> Self {
        Self::new(Framework::Iris.template_set())
    }

    pub fn echo() -> Self {
        Self::new(Framework::Echo.template_set())
    }

    pub fn chi() -> Self {
        Self::new(Framework::Chi.template_set())
    }

    pub fn fiber() -> Self {
        Self::new(Framework::Fiber.template_set())
    }

    pub fn gorilla() -> Self {
        Self::new(Framework::Gorilla.template_set())
    }
}

impl ServerGenerator for TemplateGenerator {
    fn generate(
        &self,
        engine: &dyn TemplateEngine,
        data: &JsonValue,
    ) -> Result<String, GenerationError> {
        let mut fragments = Vec::with_capacity(self.templates.len());

        for template in self.templates.iter() {
            let fragment = render_fragment(engine, template, data)?;
            tracing::debug!(
                template = %template,
                bytes = fragment.len(),
                "Rendered template"
            );
            fragments.push(fragment);
        }

        Ok(fragments.join(FRAGMENT_SEPARATOR))
    }

    fn templates(&self) -> &[String] {
        self.templates.templates()
    }
}

/// Assemble a Go source file: package clause, the framework's imports, then `body`.
///
/// Standard-library imports come first, separated from third-party ones by a
/// blank line as gofmt groups them. Without a framework only the package
/// clause is written.
pub fn go_source(package_name: &str, framework: Option<Framework>, body: &str) -> String {
    let mut source = format!("package {package_name}\n\n");

    if let Some(framework) = framework {
        let (std, third_party): (Vec<&str>, Vec<&str>) = framework
            .imports()
            .iter()
            .copied()
            .partition(|path| !path.split('/').next().is_some_and(|host| host.contains('.')));

        source.push_str("import (\n");
        for path in &std {
            source.push_str(&format!("\t\"{path}\"\n"));
        }
        if !std.is_empty() && !third_party.is_empty() {
            source.push('\n');
        }
        for path in &third_party {
            source.push_str(&format!("\t\"{path}\"\n"));
        }
        source.push_str(")\n\n");
    }

    source.push_str(body);
    source
}

/// Render one template into a buffered writer and capture it as text
fn render_fragment(
    engine: &dyn TemplateEngine,
    template: &str,
    data: &JsonValue,
) -> Result<String, GenerationError> {
    let mut writer = BufWriter::new(Vec::new());

    engine
        .render_to(template, data, &mut writer)
        .map_err(|e| GenerationError::TemplateRender {
            template: template.to_string(),
            message: e.to_string(),
        })?;

    let buffer = writer
        .into_inner()
        .map_err(|e| GenerationError::OutputFlush {
            template: template.to_string(),
            message: e.error().to_string(),
        })?;

    String::from_utf8(buffer).map_err(|e| GenerationError::OutputFlush {
        template: template.to_string(),
        message: e.to_string(),
    })
}

/// Generator used when no framework is selected; always renders nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpGenerator;

impl ServerGenerator for NoOpGenerator {
    fn generate(
        &self,
        _engine: &dyn TemplateEngine,
        _data: &JsonValue,
    ) -> Result<String, GenerationError> {
        Ok(String::new())
    }

    fn templates(&self) -> &[String] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::EngineError;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    /// Engine that renders canned text and records every template it is asked for
    #[derive(Default)]
    struct RecordingEngine {
        outputs: HashMap<String, Result<Vec<u8>, String>>,
        calls: AtomicUsize,
        rendered: Mutex<Vec<String>>,
    }

    impl RecordingEngine {
        fn with(mut self, name: &str, output: &str) -> Self {
            self.outputs
                .insert(name.to_string(), Ok(output.as_bytes().to_vec()));
            self
        }

        fn with_bytes(mut self, name: &str, output: &[u8]) -> Self {
            self.outputs.insert(name.to_string(), Ok(output.to_vec()));
            self
        }

        fn failing(mut self, name: &str, message: &str) -> Self {
            self.outputs.insert(name.to_string(), Err(message.to_string()));
            self
        }

        fn rendered(&self) -> Vec<String> {
            self.rendered.lock().unwrap().clone()
        }
    }

    impl TemplateEngine for RecordingEngine {
        fn render_to(
            &self,
            template_name: &str,
            _data: &JsonValue,
            out: &mut dyn Write,
        ) -> Result<(), EngineError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.rendered.lock().unwrap().push(template_name.to_string());

            match self.outputs.get(template_name) {
                Some(Ok(bytes)) => out
                    .write_all(bytes)
                    .map_err(|e| EngineError::new(e.to_string())),
                Some(Err(message)) => Err(EngineError::new(message.clone())),
                None => Err(EngineError::new(format!(
                    "Template '{template_name}' not found"
                ))),
            }
        }
    }

    /// Engine that echoes a field of the data value
    struct EchoDataEngine;

    impl TemplateEngine for EchoDataEngine {
        fn render_to(
            &self,
            template_name: &str,
            data: &JsonValue,
            out: &mut dyn Write,
        ) -> Result<(), EngineError> {
            write!(out, "{template_name}:{}", data["operations"])
                .map_err(|e| EngineError::new(e.to_string()))
        }
    }

    fn three_stage_generator() -> TemplateGenerator {
        TemplateGenerator::new(TemplateSet::new("custom", ["t1", "t2", "t3"]).unwrap())
    }

    #[test]
    fn test_generate_preserves_declared_order() {
        let engine = RecordingEngine::default()
            .with("t1", "interface")
            .with("t2", "middleware")
            .with("t3", "handler");

        let output = three_stage_generator()
            .generate(&engine, &json!({}))
            .unwrap();

        assert_eq!(output, "interface\nmiddleware\nhandler");
        assert_eq!(engine.rendered(), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_generate_single_fragment_has_no_separator() {
        let engine = RecordingEngine::default().with("only", "fragment");
        let generator = TemplateGenerator::new(TemplateSet::new("one", ["only"]).unwrap());

        assert_eq!(generator.generate(&engine, &json!([])).unwrap(), "fragment");
    }

    #[test]
    fn test_generate_keeps_empty_fragments() {
        let engine = RecordingEngine::default()
            .with("t1", "a")
            .with("t2", "")
            .with("t3", "c");

        let output = three_stage_generator()
            .generate(&engine, &json!({}))
            .unwrap();
        assert_eq!(output, "a\n\nc");
    }

    #[test]
    fn test_generate_stops_at_first_failure() {
        let engine = RecordingEngine::default()
            .with("t1", "interface")
            .failing("t2", "Variable `op` not found in context")
            .with("t3", "handler");

        let error = three_stage_generator()
            .generate(&engine, &json!({}))
            .unwrap_err();

        assert_eq!(
            error,
            GenerationError::TemplateRender {
                template: "t2".to_string(),
                message: "Variable `op` not found in context".to_string(),
            }
        );
        assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
        assert_eq!(engine.rendered(), vec!["t1", "t2"]);
    }

    #[test]
    fn test_generate_reports_missing_template() {
        let engine = RecordingEngine::default();
        let error = TemplateGenerator::gin()
            .generate(&engine, &json!({}))
            .unwrap_err();

        assert_eq!(error.template(), "gin/gin-interface.tmpl");
        assert!(error.to_string().contains("not found"));
        assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_generate_invalid_utf8_is_flush_error() {
        let engine = RecordingEngine::default()
            .with("t1", "ok")
            .with_bytes("t2", &[0xff, 0xfe])
            .with("t3", "never");

        let error = three_stage_generator()
            .generate(&engine, &json!({}))
            .unwrap_err();

        assert!(matches!(error, GenerationError::OutputFlush { .. }));
        assert_eq!(error.template(), "t2");
        assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_generate_passes_data_to_every_template() {
        let data = json!({ "operations": ["GetCatStatus"] });
        let output = three_stage_generator()
            .generate(&EchoDataEngine, &data)
            .unwrap();

        assert_eq!(
            output,
            "t1:[\"GetCatStatus\"]\nt2:[\"GetCatStatus\"]\nt3:[\"GetCatStatus\"]"
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let engine = RecordingEngine::default()
            .with("t1", "a")
            .with("t2", "b")
            .with("t3", "c");
        let generator = three_stage_generator();
        let data = json!({ "operations": [] });

        let first = generator.generate(&engine, &data).unwrap();
        let second = generator.generate(&engine, &data).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_noop_generator_renders_nothing() {
        let engine = RecordingEngine::default().failing("t1", "should not be called");

        for data in [json!(null), json!([]), json!({ "operations": 42 }), json!("junk")] {
            assert_eq!(NoOpGenerator.generate(&engine, &data).unwrap(), "");
        }
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
        assert!(NoOpGenerator.templates().is_empty());
    }

    #[test]
    fn test_named_constructors_match_framework_sets() {
        let constructors = [
            (TemplateGenerator::std_http(), Framework::StdHttp),
            (TemplateGenerator::gin(), Framework::Gin),
            (TemplateGenerator::iris(), Framework::Iris),
            (TemplateGenerator::echo(), Framework::Echo),
            (TemplateGenerator::chi(), Framework::Chi),
            (TemplateGenerator::fiber(), Framework::Fiber),
            (TemplateGenerator::gorilla(), Framework::Gorilla),
        ];

        for (generator, framework) in constructors {
            assert_eq!(generator.template_set(), &framework.template_set());
            assert_eq!(framework.generator(), generator);
            assert_eq!(generator.templates().len(), 3);
        }
    }

    #[test]
    #[traced_test]
    fn test_generate_logs_each_rendered_template() {
        let engine = RecordingEngine::default()
            .with("t1", "a")
            .with("t2", "b")
            .with("t3", "c");

        three_stage_generator().generate(&engine, &json!({})).unwrap();

        assert!(logs_contain("Rendered template"));
        assert!(logs_contain("template=t3"));
    }

    #[test]
    fn test_go_source_groups_imports() {
        let source = go_source("api", Some(Framework::Chi), "type ServerInterface interface {}");

        assert_eq!(
            source,
            "package api\n\nimport (\n\t\"net/http\"\n\n\t\"github.com/go-chi/chi/v5\"\n)\n\ntype ServerInterface interface {}"
        );
    }

    #[test]
    fn test_go_source_single_import() {
        let source = go_source("cats", Some(Framework::Gin), "body");
        assert_eq!(
            source,
            "package cats\n\nimport (\n\t\"github.com/gin-gonic/gin\"\n)\n\nbody"
        );
    }

    #[test]
    fn test_go_source_without_framework_is_package_only() {
        assert_eq!(go_source("api", None, ""), "package api\n\n");
    }
}
