//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from a generation-eligibility check.
#[derive(Debug)]
pub struct CheckReport {
    /// Number of shapes in the loaded model.
    pub shape_count: usize,
    /// All namespaces the model contributes.
    pub namespaces: Vec<String>,
    /// Namespaces already generated by upstream artifacts.
    pub already_generated: Vec<String>,
    /// Namespaces eligible for generation.
    pub eligible: Vec<String>,
    /// Dependency coordinates carried for the loader.
    pub dependencies: Vec<String>,
    /// Fatal configuration problems (e.g. duplicate manifest claims).
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        if !self.errors.is_empty() {
            out.newline();
        }

        out.key_value("shapes", &self.shape_count.to_string());
        out.key_value("namespaces", &self.namespaces.len().to_string());

        if !self.dependencies.is_empty() {
            out.section("Dependencies");
            for dependency in &self.dependencies {
                out.list_item(dependency);
            }
        }

        if !self.already_generated.is_empty() {
            out.section("Already generated upstream");
            for namespace in &self.already_generated {
                out.list_item(namespace);
            }
        }

        out.section("Eligible for generation");
        if self.eligible.is_empty() {
            out.list_item("(none)");
        }
        for namespace in &self.eligible {
            out.list_item(namespace);
        }

        if self.is_valid() {
            out.newline();
            out.preformatted("✓ generation boundary is consistent");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_validity() {
        let mut report = CheckReport {
            shape_count: 1,
            namespaces: vec!["a".into()],
            already_generated: vec![],
            eligible: vec!["a".into()],
            dependencies: vec![],
            errors: vec![],
        };
        assert!(report.is_valid());

        report.errors.push("duplicate claim".into());
        assert!(!report.is_valid());
    }
}
