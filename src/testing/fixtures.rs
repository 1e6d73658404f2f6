//! Catalog documents shared by unit tests.

/// Two categories, four options. `vim`/`vscode` in Editors, `rust`/`go` in Languages.
pub const EDITORS_AND_LANGUAGES: &str = r#"
app_name: Test Setup
app_version: "3.1"
subtitle: Fixture catalog
categories:
  - name: Editors
    description: Text editors
    options:
      - id: vim
        label: Vim
        script: |
          apt install -y vim
      - id: vscode
        label: VS Code
        script: |
          apt install -y code
  - name: Languages
    description: Toolchains
    options:
      - id: rust
        label: Rust
        script: |
          echo install-rust
      - id: go
        label: Go
        script: |
          apt install -y golang-go
"#;

/// A different, smaller catalog used to tell cache and remote apart.
pub const REMOTE_ONLY: &str = r#"
app_name: Remote Setup
app_version: "9.0"
subtitle: Served by the remote endpoint
categories:
  - name: Shells
    description: Interactive shells
    options:
      - id: zsh
        label: Zsh
        script: apt install -y zsh
"#;
