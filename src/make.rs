//! Build driver for scaffolded projects.
//!
//! Desktop and web builds configure CMake once, when their build directory is
//! created, and only build on later runs. This is a coarse shortcut: a stale
//! configuration is not detected, `--clean` is the way out.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{ANDROID_PROJECT_DIR, DESKTOP_BUILD_DIR, WEB_BUILD_DIR};
use crate::error::Result;
use crate::process::{CommandRunner, Invocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    Android,
    Web,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    pub fn from_release_flag(release: bool) -> Self {
        if release {
            Profile::Release
        } else {
            Profile::Debug
        }
    }

    fn cmake_build_type(self) -> &'static str {
        match self {
            Profile::Debug => "-DCMAKE_BUILD_TYPE=DEBUG",
            Profile::Release => "-DCMAKE_BUILD_TYPE=RELEASE",
        }
    }

    fn gradle_task(self) -> &'static str {
        match self {
            Profile::Debug => "assembleDebug",
            Profile::Release => "assembleRelease",
        }
    }
}

/// The steps needed to build one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Build directory to create first; set only when configuring.
    pub create_dir: Option<PathBuf>,
    pub configure: Option<Invocation>,
    pub build: Invocation,
}

pub struct BuildDriver<'a> {
    project_root: PathBuf,
    profile: Profile,
    generator: Option<String>,
    runner: &'a dyn CommandRunner,
}

impl<'a> BuildDriver<'a> {
    pub fn new<P: AsRef<Path>>(
        project_root: P,
        profile: Profile,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            profile,
            generator: None,
            runner,
        }
    }

    /// CMake generator (`-G`) for desktop and web configure steps.
    pub fn with_generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    /// Works out what building `platform` takes, given the current state of the project.
    pub fn plan(&self, platform: Platform) -> BuildPlan {
        match platform {
            Platform::Desktop => self.cmake_plan(
                DESKTOP_BUILD_DIR,
                Vec::new(),
                "cmake",
                "-DYOURGAME_PLATFORM=desktop",
            ),
            Platform::Web => self.cmake_plan(
                WEB_BUILD_DIR,
                // emconfigure needs the Emscripten environment (emsdk_env) sourced beforehand.
                vec!["cmake".to_string()],
                "emconfigure",
                "-DYOURGAME_PLATFORM=wasm",
            ),
            Platform::Android => {
                let gradlew = if cfg!(windows) { "gradlew.bat" } else { "./gradlew" };
                let build = Invocation::new(gradlew, self.project_root.join(ANDROID_PROJECT_DIR))
                    .arg(self.profile.gradle_task());
                BuildPlan {
                    create_dir: None,
                    configure: None,
                    build,
                }
            }
        }
    }

    fn cmake_plan(
        &self,
        build_dir: &str,
        prefix_args: Vec<String>,
        program: &str,
        platform_define: &str,
    ) -> BuildPlan {
        let build_dir = self.project_root.join(build_dir);
        let build = Invocation::new("cmake", &build_dir).args(["--build", "."]);
        if build_dir.is_dir() {
            debug!("'{}' exists, skipping configure.", build_dir.display());
            return BuildPlan {
                create_dir: None,
                configure: None,
                build,
            };
        }

        let mut configure = Invocation::new(program, &build_dir)
            .args(prefix_args)
            .args(["..", platform_define, self.profile.cmake_build_type()]);
        if let Some(generator) = &self.generator {
            configure = configure.arg("-G").arg(generator.as_str());
        }
        BuildPlan {
            create_dir: Some(build_dir),
            configure: Some(configure),
            build,
        }
    }

    /// Configures (if needed) and builds `platform`.
    pub fn build(&self, platform: Platform) -> Result<()> {
        let plan = self.plan(platform);
        if let Some(dir) = &plan.create_dir {
            fs::create_dir_all(dir)?;
        }
        if let Some(configure) = &plan.configure {
            println!("configure command: {configure}");
            self.runner.run(configure)?;
        }
        println!("build command: {}", plan.build);
        self.runner.run(&plan.build)
    }

    /// Removes the desktop and web build directories. Returns the removed ones.
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for dir in [DESKTOP_BUILD_DIR, WEB_BUILD_DIR] {
            let path = self.project_root.join(dir);
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
                println!("{} removed", path.display());
                removed.push(path);
            }
        }
        Ok(removed)
    }
}
