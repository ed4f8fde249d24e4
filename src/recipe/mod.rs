//! Recipe Generator: the single Makefile that builds every test case.
//!
//! The recipe never lists files. For each directory of the [`DirectorySet`] it emits one GNU make glob per
//! language, selecting the case-prefixed sources and filtering out the platform variants:
//!
//! ```make
//! $(filter-out $(wildcard dir/CWE*w32*.c) $(wildcard dir/CWE*wchar_t*.c),$(wildcard dir/CWE*.c))
//! ```
//!
//! The variant markers come from the same [`VariantFilter`] the indexer uses for the main file, so make compiles
//! exactly the units whose entry points the main file calls.
//!
//! ## Modules
//!
//! - `writer` - Makefile text builder

mod writer;

pub use writer::RecipeWriter;

use makegen_core::languages::{LANGUAGES, LanguageInfo};

use crate::config::{GeneratorConfig, Toolchain, VariantFilter};
use crate::discovery::DirectorySet;

/// Generates recipe text for a directory set
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    toolchain: Toolchain,
    /// Support directory, forward slashes
    support_dir: String,
    main_file: String,
    case_prefix: String,
    variants: VariantFilter,
}

impl RecipeGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            toolchain: config.toolchain.clone(),
            support_dir: config.support_dir_slash(),
            main_file: config.main_file.clone(),
            case_prefix: config.case_prefix.clone(),
            variants: config.variants.clone(),
        }
    }

    /// Produce the full recipe. Directories are emitted in ascending order, so equal inputs give identical text.
    #[tracing::instrument(skip_all, fields(dirs = dirs.len()))]
    pub fn generate(&self, dirs: &DirectorySet) -> String {
        let mut w = RecipeWriter::new();
        let tc = &self.toolchain;

        w.assign("CC", &tc.cc);
        w.assign("CPP", &tc.cpp);
        w.assign("DEBUG", &tc.debug);
        w.assign("CFLAGS", &tc.cflags);
        w.assign("LFLAGS", &tc.lflags);
        w.blank();
        w.assign("INCLUDES", &format!("-I {}", self.support_dir));
        w.blank();
        w.assign("SUPPORT_PATH", &format!("{}/", self.support_dir));
        w.blank();
        w.assign("MAIN", &format!("$(SUPPORT_PATH){}", self.main_file));
        w.assign("MAIN_OBJECT", &object_name(&self.main_file));
        w.blank();

        let support_files: Vec<String> = tc
            .c_support_sources
            .iter()
            .map(|s| format!("$(SUPPORT_PATH){s}"))
            .collect();
        let support_objects: Vec<String> = tc.c_support_sources.iter().map(|s| object_name(s)).collect();
        w.assign("C_SUPPORT_FILES", &support_files.join(" "));
        w.assign("C_SUPPORT_OBJECTS", &support_objects.join(" "));

        for lang in LANGUAGES {
            w.blank();
            w.comment(&self.selection_comment(lang.extension));
            w.assign_continued(lang.sources_var, &self.source_globs(dirs, lang));
            w.assign(
                lang.objects_var,
                &format!("$({}:.{}=.o)", lang.sources_var, lang.extension),
            );
        }

        let mut objects = vec!["$(MAIN_OBJECT)".to_string()];
        objects.extend(LANGUAGES.iter().map(|l| format!("$({})", l.objects_var)));
        objects.push("$(C_SUPPORT_OBJECTS)".to_string());
        w.blank();
        w.assign("OBJECTS", &objects.join(" "));
        w.assign("TARGET", &tc.target);

        w.blank();
        w.line("all: $(TARGET)");
        w.blank();
        w.rule("$(TARGET)", "$(OBJECTS)", &["$(CPP) $(LFLAGS) $(OBJECTS) -o $(TARGET)"]);

        for lang in LANGUAGES {
            w.blank();
            w.rule(
                &format!("$({})", lang.objects_var),
                &format!("$({})", lang.sources_var),
                &[format!("$(CC) $(CFLAGS) $(INCLUDES) $(@:.o=.{}) -o $@", lang.extension).as_str()],
            );
        }

        w.blank();
        w.rule(
            "$(C_SUPPORT_OBJECTS)",
            "$(C_SUPPORT_FILES)",
            &["$(CC) $(CFLAGS) $(INCLUDES) $(SUPPORT_PATH)$(@:.o=.c) -o $@"],
        );
        w.blank();
        w.rule("$(MAIN_OBJECT)", "$(MAIN)", &["$(CC) $(CFLAGS) $(INCLUDES) $(MAIN) -o $@"]);

        let mut clean = String::from("rm -rf *.o $(TARGET)");
        for dir in dirs.iter() {
            clean.push(' ');
            clean.push_str(dir);
            clean.push_str("/*.o");
        }
        w.blank();
        w.line("clean:");
        w.line(&format!("\t{clean}"));

        w.finish()
    }

    /// One glob expression per directory selecting the portable sources of `lang`.
    pub fn source_globs(&self, dirs: &DirectorySet, lang: &LanguageInfo) -> Vec<String> {
        dirs.iter().map(|dir| self.source_glob(dir, lang.extension)).collect()
    }

    /// Glob expression selecting the portable `.ext` sources of one directory.
    pub fn source_glob(&self, dir: &str, ext: &str) -> String {
        let all = format!("$(wildcard {dir}/{}*.{ext})", self.case_prefix);
        if self.variants.markers().is_empty() {
            return all;
        }
        let excluded: Vec<String> = self
            .variants
            .markers()
            .iter()
            .map(|m| format!("$(wildcard {dir}/{}*{m}*.{ext})", self.case_prefix))
            .collect();
        format!("$(filter-out {},{all})", excluded.join(" "))
    }

    fn selection_comment(&self, ext: &str) -> String {
        let markers = self.variants.markers();
        if markers.is_empty() {
            return format!("grab all the .{ext} files");
        }
        let quoted: Vec<String> = markers.iter().map(|m| format!("\"{m}\"")).collect();
        format!("only grab the .{ext} files without {} in the name", quoted.join(" or "))
    }
}

/// `main_linux.cpp` -> `main_linux.o`
fn object_name(file: &str) -> String {
    let name = file.rsplit('/').next().unwrap_or(file);
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    format!("{stem}.o")
}
