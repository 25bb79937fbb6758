//! Stub package generation for sdk-stubgen
//!
//! This crate renders a parsed
//! [`ServicePackage`](sdk_stubgen_common::structures::ServicePackage) into a
//! typed stub package: one `.pyi` module per entity kind, a `type_defs`
//! module with every TypedDict, and a runtime `helpers.py`.

mod context;
mod templates;

use context::{
    collect_import_records, import_lines, split_runtime_imports, ClassView, FunctionView,
    TypeDefView,
};
use sdk_stubgen_common::import_helpers::{ImportRecord, ImportString};
use sdk_stubgen_common::structures::{
    ClassRecord, ServicePackage, TypeSource, SERVICE_RESOURCE_MODULE, TYPE_DEFS_MODULE,
};
use sdk_stubgen_common::{GeneratorError, Result, StubConfig};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::{debug, info};

/// Stub generator
///
/// Writes one service package per call to `{module_prefix}{service}/`:
/// - `__init__.pyi` (re-exports)
/// - `client.pyi`
/// - `paginator.pyi`
/// - `waiter.pyi`
/// - `service_resource.pyi` (services with resources only)
/// - `type_defs.pyi`
/// - `helpers.py`
pub struct StubGenerator {
    config: StubConfig,
    tera: Tera,
}

impl StubGenerator {
    pub fn new(config: StubConfig) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { config, tera })
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Directory a package is written to under `output_dir`
    pub fn package_directory(&self, package: &ServicePackage, output_dir: &Path) -> PathBuf {
        output_dir.join(package.service_name.module_name(&self.config.module_prefix))
    }

    /// Generate all stub modules of a package
    ///
    /// Returns the package directory.
    pub fn generate_to_directory(
        &self,
        package: &ServicePackage,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let package_dir = self.package_directory(package, output_dir);
        fs::create_dir_all(&package_dir).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to create package directory {:?}: {}",
                package_dir, e
            ))
        })?;

        self.generate_init(package, &package_dir)?;
        self.generate_client(package, &package_dir)?;
        self.generate_paginators(package, &package_dir)?;
        self.generate_waiters(package, &package_dir)?;
        self.generate_service_resource(package, &package_dir)?;
        self.generate_type_defs(package, &package_dir)?;
        self.generate_helpers(package, &package_dir)?;

        info!(
            service = %package.service_name,
            path = %package_dir.display(),
            "Generated stub package"
        );
        Ok(package_dir)
    }

    /// Generate `__init__.pyi`
    fn generate_init(&self, package: &ServicePackage, package_dir: &Path) -> Result<()> {
        let client_name = package.client.name().to_string();
        let mut records = vec![local_record("client", &client_name)];
        let mut exports = vec!["Client".to_string(), client_name.clone()];

        let service_resource_name = package
            .service_resource
            .as_ref()
            .map(|service_resource| service_resource.name().to_string());
        if let Some(name) = &service_resource_name {
            records.push(local_record(SERVICE_RESOURCE_MODULE, name));
            exports.push("ServiceResource".to_string());
            exports.push(name.clone());
        }
        for paginator in &package.paginators {
            records.push(local_record("paginator", paginator.name()));
            exports.push(paginator.name().to_string());
        }
        for waiter in &package.waiters {
            records.push(local_record("waiter", waiter.name()));
            exports.push(waiter.name().to_string());
        }
        exports.sort();

        let mut context = self.create_context(package);
        context.insert("imports", &import_lines(records, "__init__"));
        context.insert("exports", &exports);
        context.insert("client_name", &client_name);
        context.insert("service_resource_name", &service_resource_name);

        self.render_to_file("__init__.pyi", &context, package_dir)
    }

    /// Generate `client.pyi`
    fn generate_client(&self, package: &ServicePackage, package_dir: &Path) -> Result<()> {
        let client = &package.client;
        let context = self.create_module_context(
            package,
            "client",
            client.get_required_import_records(),
            &[&client.class],
        );
        self.render_to_file("client.pyi", &context, package_dir)
    }

    /// Generate `paginator.pyi`
    fn generate_paginators(&self, package: &ServicePackage, package_dir: &Path) -> Result<()> {
        let classes: Vec<&ClassRecord> = package.paginators.iter().map(|p| &p.class).collect();
        let context = self.create_module_context(
            package,
            "paginator",
            collect_import_records(&package.paginators),
            &classes,
        );
        self.render_to_file("paginator.pyi", &context, package_dir)
    }

    /// Generate `waiter.pyi`
    fn generate_waiters(&self, package: &ServicePackage, package_dir: &Path) -> Result<()> {
        let classes: Vec<&ClassRecord> = package.waiters.iter().map(|w| &w.class).collect();
        let context = self.create_module_context(
            package,
            "waiter",
            collect_import_records(&package.waiters),
            &classes,
        );
        self.render_to_file("waiter.pyi", &context, package_dir)
    }

    /// Generate `service_resource.pyi`, if the service has resources
    fn generate_service_resource(
        &self,
        package: &ServicePackage,
        package_dir: &Path,
    ) -> Result<()> {
        let Some(service_resource) = &package.service_resource else {
            debug!(service = %package.service_name, "No service resource, skipping module");
            return Ok(());
        };

        let mut classes = vec![&service_resource.class];
        classes.extend(service_resource.sub_resources.iter().map(|r| &r.class));
        classes.extend(service_resource.all_collections().into_iter().map(|c| &c.class));

        let context = self.create_module_context(
            package,
            SERVICE_RESOURCE_MODULE,
            service_resource.get_required_import_records(),
            &classes,
        );
        self.render_to_file("service_resource.pyi", &context, package_dir)
    }

    /// Generate `type_defs.pyi`
    fn generate_type_defs(&self, package: &ServicePackage, package_dir: &Path) -> Result<()> {
        let type_defs = package.extract_type_defs();
        let views: Vec<TypeDefView> = type_defs.iter().map(TypeDefView::from).collect();
        let exports: Vec<&str> = views.iter().map(|view| view.name.as_str()).collect();

        let mut context = self.create_context(package);
        context.insert(
            "imports",
            &import_lines(package.get_type_defs_import_records(), TYPE_DEFS_MODULE),
        );
        context.insert("exports", &exports);
        context.insert("type_defs", &views);

        self.render_to_file("type_defs.pyi", &context, package_dir)
    }

    /// Generate `helpers.py`
    fn generate_helpers(&self, package: &ServicePackage, package_dir: &Path) -> Result<()> {
        let (runtime_imports, type_imports) =
            split_runtime_imports(collect_import_records(&package.helpers), "helpers");
        let functions: Vec<FunctionView> = package.helpers.iter().map(FunctionView::from).collect();
        let exports: Vec<&str> = package.helpers.iter().map(|h| h.name.as_str()).collect();

        let mut context = self.create_context(package);
        context.insert("runtime_imports", &runtime_imports);
        context.insert("type_imports", &type_imports);
        context.insert("exports", &exports);
        context.insert("functions", &functions);

        self.render_to_file("helpers.py", &context, package_dir)
    }

    /// Render a template and write it under the template's own name
    fn render_to_file(&self, template: &str, context: &Context, package_dir: &Path) -> Result<()> {
        let rendered = self
            .tera
            .render(template, context)
            .map_err(|e| GeneratorError::Generation(format!("Template error: {:?}", e)))?;

        let output_path = package_dir.join(template);
        fs::write(&output_path, rendered).map_err(|e| {
            GeneratorError::Generation(format!("Failed to write {}: {}", template, e))
        })?;

        debug!(path = %output_path.display(), "Wrote stub module");
        Ok(())
    }

    /// Context for a module of class declarations
    fn create_module_context(
        &self,
        package: &ServicePackage,
        module: &str,
        records: BTreeSet<ImportRecord>,
        classes: &[&ClassRecord],
    ) -> Context {
        let views: Vec<ClassView> = classes.iter().map(|class| ClassView::from(*class)).collect();
        let exports: Vec<&str> = views.iter().map(|view| view.name.as_str()).collect();

        let mut context = self.create_context(package);
        context.insert("imports", &import_lines(records, module));
        context.insert("exports", &exports);
        context.insert("classes", &views);
        context
    }

    /// Values shared by every template
    fn create_context(&self, package: &ServicePackage) -> Context {
        let mut context = Context::new();
        context.insert("service_name", &package.service_name.name);
        context.insert(
            "module_name",
            &package.service_name.module_name(&self.config.module_prefix),
        );
        context.insert(
            "package_name",
            &package.service_name.package_name(&self.config.package_prefix),
        );
        context.insert("builder_version", &self.config.builder_version);
        context
    }
}

fn local_record(module: &str, name: &str) -> ImportRecord {
    ImportRecord::new(ImportString::local(module), name)
}

/// Generate a stub package (convenience function)
pub fn generate_stubs(
    package: &ServicePackage,
    output_dir: &Path,
    config: StubConfig,
) -> Result<PathBuf> {
    let generator = StubGenerator::new(config)?;
    generator.generate_to_directory(package, output_dir)
}
