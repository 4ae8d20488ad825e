//! Common constants used throughout the yginit tools.

/// Library directory holding the initializer data, relative to the library root.
pub const INIT_DIR: &str = "init";

/// Project template, relative to [`INIT_DIR`].
pub const TEMPLATE_DIR: &str = "template";

/// Supported configuration file names, looked up in [`INIT_DIR`].
pub const CONFIG_FILES: [&str; 3] = ["yginit.json", "yginit.yml", "yginit.yaml"];

/// Template item holding project assets.
pub const ASSETS_DIR: &str = "assets";

/// Template item holding the project's own sources.
pub const SOURCES_DIR: &str = "src";

/// Build descriptor rendered into the new project.
pub const BUILD_DESCRIPTOR: &str = "CMakeLists.txt";

/// Android gradle file rendered into the new project.
pub const ANDROID_GRADLE: &str = "build/android/app/build.gradle";

/// Android manifest rendered into the new project.
pub const ANDROID_MANIFEST: &str = "build/android/app/src/main/AndroidManifest.xml";

/// README rendered into the new project.
pub const README: &str = "README.md";

/// Android gradle project of a scaffolded project.
pub const ANDROID_PROJECT_DIR: &str = "build/android";

/// Desktop build output directory of a scaffolded project.
pub const DESKTOP_BUILD_DIR: &str = "_build";

/// WebAssembly build output directory of a scaffolded project.
pub const WEB_BUILD_DIR: &str = "_build_web";

/// File list handed to clang-format.
pub const FORMAT_FILE_LIST: &str = "_yourgame_files.txt";
