//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const CMAKE_TEMPLATE: &str = r#"cmake_minimum_required(VERSION 3.6)
project({{ YOURGAME_PROJECT_NAME }})
set(YOURGAME_ROOT "{{ YOURGAME_ROOT }}")
set(YOURGAME_GIT_COMMIT_INIT "{{ YOURGAME_GIT_COMMIT_INIT }}")
set(YOURGAME_CLONE {{ YOURGAME_CLONE }})
set(YOURGAME_BARE {{ YOURGAME_BARE }})
set(YOURGAME_EXT_PROJ{% for p in YOURGAME_EXT_PROJ %} {{ p }}{% endfor %})
set(MY_SOURCES{% for s in YOURGAME_MY_SOURCES %} src/{{ s }}{% endfor %})
"#;

pub const README_TEMPLATE: &str =
    "# {{ YOURGAME_PROJECT_NAME }}\n\nCreated from yourgamelib {{ YOURGAME_GIT_COMMIT_INIT }}.\n";

pub const GRADLE_TEMPLATE: &str = r#"android {
    defaultConfig {
        applicationId "com.yourgame.{{ YOURGAME_PROJECT_NAME_LOWER }}"
    }
}
"#;

pub const MANIFEST_TEMPLATE: &str =
    "<manifest>\n    <application android:label=\"{{ YOURGAME_PROJECT_NAME }}\"/>\n</manifest>\n";

/// A temporary workspace with a library installation in `lib/` and room
/// for new projects in `projects/`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn lib_root(&self) -> PathBuf {
        self.dir.path().join("lib")
    }

    pub fn template_dir(&self) -> PathBuf {
        self.lib_root().join("init").join("template")
    }

    pub fn projects(&self) -> PathBuf {
        self.dir.path().join("projects")
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.projects().join(name)
    }
}

pub fn write<P: AsRef<Path>>(path: P, content: &str) {
    let path = path.as_ref();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Library with a complete template but no git repository.
pub fn workspace_without_git() -> Workspace {
    let ws = Workspace { dir: TempDir::new().unwrap() };
    let t = ws.template_dir();
    write(t.join("CMakeLists.txt"), CMAKE_TEMPLATE);
    write(t.join("README.md"), README_TEMPLATE);
    write(t.join("build/android/app/build.gradle"), GRADLE_TEMPLATE);
    write(t.join("build/android/app/src/main/AndroidManifest.xml"), MANIFEST_TEMPLATE);
    write(t.join("make.py"), "print('build')\n");
    write(t.join("version/mygame_version.h"), "#define MYGAME_VERSION 1\n");
    write(t.join("src/mygame.cpp"), "int main() { return 0; }\n");
    write(t.join("src/mygame.h"), "#pragma once\n");
    write(t.join("assets/stock_font.ttf"), "font");
    write(t.join("assets/stock_shaders/quad.vert"), "void main() {}\n");
    write(t.join("assets/LICENSE_assets.txt"), "CC0\n");
    write(t.join("assets/hero.png"), "png");
    write(t.join("assets/.DS_Store"), "junk");
    fs::create_dir_all(ws.projects()).unwrap();
    ws
}

/// Library with a complete template committed to git.
pub fn workspace() -> Workspace {
    let ws = workspace_without_git();
    commit_all(&ws.lib_root());
    ws
}

/// Initializes a repository at `root` and commits everything in it.
pub fn commit_all(root: &Path) -> String {
    let repo = git2::Repository::init(root).unwrap();
    let mut index = repo.index().unwrap();
    index.add_all(["*"], git2::IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("yginit tests", "tests@yourgame.invalid").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "import template", &tree, &[])
        .unwrap()
        .to_string()
}

pub fn read<P: AsRef<Path>>(path: P) -> String {
    fs::read_to_string(path).unwrap()
}
