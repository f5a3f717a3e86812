//! Writing the planned interfaces to a Java source tree.

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, trace};

use crate::{
    emitter::{
        CONSTANTS_CLASS_NAME, DEFAULT_BASE_PACKAGE, DEFAULT_CONSTANTS_PACKAGE, EmitContext,
        actuator::{actuator_class_name, render_actuator},
        constants::render_basic_constant,
    },
    errors::{GenerationError, IoResultExt},
    types::LambdaKind,
};

pub mod plan;

pub use plan::Plan;

/// The source root used unless configured otherwise.
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";

/// Settings of a generation run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GeneratorConfig {
    /// The root of the Java source tree; packages are laid out below it.
    pub source_root: PathBuf,
    /// The package under which each kind gets its own sub-package.
    pub base_package: String,
    /// The package of the `BasicConstant` interface.
    pub constants_package: String,
    /// The value of the `@author` tag, omitted if [`None`].
    pub author: Option<String>,
    /// Whether the support interfaces `BasicConstant`, `Actuator` and `ActuatorThrow` are
    /// written as well.
    pub write_constants: bool,
    /// Renders everything without touching the filesystem.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            base_package: DEFAULT_BASE_PACKAGE.to_owned(),
            constants_package: DEFAULT_CONSTANTS_PACKAGE.to_owned(),
            author: None,
            write_constants: true,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// The settings of the rendered sources.
    #[must_use]
    pub fn emit_context(&self) -> EmitContext {
        EmitContext {
            base_package: self.base_package.clone(),
            constants_package: self.constants_package.clone(),
            author: self.author.clone(),
        }
    }

    /// The directory of a package, e.g., `src/main/java/com/github/zhitron`.
    #[must_use]
    pub fn package_dir(&self, package: &str) -> PathBuf {
        self.source_root
            .join(package.split('.').collect::<PathBuf>())
    }
}

/// The outcome of a generation run.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct GenerationReport {
    files: BTreeMap<LambdaKind, usize>,
    support_files: usize,
    dry_run: bool,
}

impl GenerationReport {
    /// The number of files of the given kind, counting both variants of an interface.
    #[must_use]
    pub fn files_of(&self, kind: LambdaKind) -> usize {
        self.files.get(&kind).copied().unwrap_or_default()
    }

    /// The number of planned interface files, excluding the support interfaces.
    #[must_use]
    pub fn interface_files(&self) -> usize {
        self.files.values().sum()
    }

    /// The number of support interfaces produced: `BasicConstant`, `Actuator` and
    /// `ActuatorThrow`.
    #[must_use]
    pub fn support_files(&self) -> usize {
        self.support_files
    }

    /// Whether `BasicConstant.java` was produced.
    #[must_use]
    pub fn constants_written(&self) -> bool {
        self.support_files > 0
    }

    /// The number of all files produced.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.interface_files() + self.support_files
    }

    /// Whether the run skipped all writes.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Display for GenerationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (kind, count) in &self.files {
            writeln!(f, "{kind}: {count} files")?;
        }
        if self.support_files > 0 {
            writeln!(f, "Support: {} files", self.support_files)?;
        }
        write!(f, "Total: {} files", self.total_files())?;
        if self.dry_run {
            write!(f, " (dry run, nothing written)")?;
        }
        Ok(())
    }
}

/// Writes every planned interface below a source root.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    plan: Plan,
}

impl Generator {
    /// Creates a generator of the standard plan.
    ///
    /// # Errors
    /// See [`Plan::standard`].
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        Ok(Self::with_plan(config, Plan::standard()?))
    }

    /// Creates a generator of the given plan.
    #[must_use]
    pub fn with_plan(config: GeneratorConfig, plan: Plan) -> Self {
        Self { config, plan }
    }

    /// The settings of this generator.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The interfaces this generator writes.
    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Renders the plain and the throwing variant of every planned interface and writes each
    /// to `<package dir>/<ClassName>.java`, overwriting existing files.
    ///
    /// # Errors
    /// [`GenerationError::Io`] if a directory cannot be created or a file cannot be written.
    /// The run stops at the first failure.
    #[tracing::instrument(
        skip(self),
        fields(root = %self.config.source_root.display(), dry_run = self.config.dry_run)
    )]
    pub fn run(&self) -> Result<GenerationReport, GenerationError> {
        let context = self.config.emit_context();
        let mut report = GenerationReport {
            dry_run: self.config.dry_run,
            ..GenerationReport::default()
        };
        info!(templates = self.plan.len(), "Generating interfaces");

        for kind in LambdaKind::ALL {
            let mut templates = self
                .plan
                .templates()
                .iter()
                .filter(|it| it.kind() == kind)
                .peekable();
            if templates.peek().is_none() {
                continue;
            }
            let dir = self.config.package_dir(&context.package_of(kind));
            self.create_dir(&dir)?;
            for template in templates {
                for throwing in [false, true] {
                    let class_name = template.class_name(throwing);
                    let source = template.render(throwing, &context);
                    trace!(%kind, class_name, "Rendered template");
                    self.write(&dir.join(format!("{class_name}.java")), &source)?;
                    *report.files.entry(kind).or_default() += 1;
                }
            }
            info!(%kind, files = report.files_of(kind), "Generated kind");
        }

        if self.config.write_constants {
            let dir = self.config.package_dir(&self.config.constants_package);
            self.create_dir(&dir)?;
            let path = dir.join(format!("{CONSTANTS_CLASS_NAME}.java"));
            self.write(&path, &render_basic_constant(&context))?;
            report.support_files += 1;
            for throwing in [false, true] {
                let path = dir.join(format!("{}.java", actuator_class_name(throwing)));
                self.write(&path, &render_actuator(throwing, &context))?;
                report.support_files += 1;
            }
        }

        info!(files = report.total_files(), "Generation finished");
        Ok(report)
    }

    fn create_dir(&self, dir: &Path) -> Result<(), GenerationError> {
        if self.config.dry_run {
            return Ok(());
        }
        fs::create_dir_all(dir).at_path(dir)
    }

    fn write(&self, path: &Path, source: &str) -> Result<(), GenerationError> {
        if self.config.dry_run {
            debug!(path = %path.display(), bytes = source.len(), "Skipped write");
            return Ok(());
        }
        fs::write(path, source).at_path(path)?;
        debug!(path = %path.display(), bytes = source.len(), "Wrote file");
        Ok(())
    }
}
