//! Generated file templates
//!
//! Templates are embedded at compile time from `resources/templates/` and
//! rendered with `{{.key}}` placeholder substitution.

use std::path::Path;

use crate::engine::EngineMode;
use crate::paths;
use crate::platform::{TargetPlatform, DEVKITPRO_DEFAULT_ROOT};

// =============================================================================
// Embedded Templates
// =============================================================================

mod embedded {
    pub const MAIN_CPP: &str = include_str!("../resources/templates/main.cpp");
    pub const GITIGNORE: &str = include_str!("../resources/templates/gitignore");
    pub const README_MD: &str = include_str!("../resources/templates/README.md");

    pub const XMAKE_HEADER: &str = include_str!("../resources/templates/xmake/header.lua");
    pub const XMAKE_ENGINE_CLONE: &str =
        include_str!("../resources/templates/xmake/engine_clone.lua");
    pub const XMAKE_ENGINE_PACKAGE: &str =
        include_str!("../resources/templates/xmake/engine_package.lua");
    pub const XMAKE_TARGET: &str = include_str!("../resources/templates/xmake/target.lua");
    pub const XMAKE_POST_BUILD_SWITCH: &str =
        include_str!("../resources/templates/xmake/post_build_switch.lua");
    pub const XMAKE_POST_BUILD_MINGW: &str =
        include_str!("../resources/templates/xmake/post_build_mingw.lua");
}

/// Values substituted into templates
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub author: &'a str,
    pub engine: EngineMode,
    /// Engine checkout providing toolchain files (package mode)
    pub engine_root: &'a Path,
    /// xmake package repository (package mode)
    pub package_repo: &'a str,
}

/// Replace each `{{.key}}` with its value in a single pass.
///
/// Substituted values are never rescanned, so a value containing `{{.x}}`
/// is emitted as-is. Unknown keys are left in place.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    const OPEN: &str = "{{.";
    const CLOSE: &str = "}}";

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after[end + CLOSE.len()..];
    }
    out.push_str(rest);
    out
}

/// `src/main.cpp`
pub fn entry_point(ctx: &TemplateContext) -> String {
    render(embedded::MAIN_CPP, &[("name", ctx.name)])
}

/// `.gitignore` (fixed content)
pub fn ignore_file() -> &'static str {
    embedded::GITIGNORE
}

/// `README.md`
pub fn readme(ctx: &TemplateContext) -> String {
    let platform_list = TargetPlatform::ALL
        .iter()
        .map(|p| format!("- {}", p.display_name()))
        .collect::<Vec<_>>()
        .join("\n");

    let (engine_layout_line, engine_note) = match ctx.engine {
        EngineMode::Clone => (
            format!("├── {}/           # Engine source\n", paths::project::ENGINE_DIR),
            "The engine source lives in `Extra2D/` and is built together with the game."
                .to_string(),
        ),
        EngineMode::Package => (
            String::new(),
            "The engine is pulled in as the `extra2d` xmake package on first configure."
                .to_string(),
        ),
    };

    render(
        embedded::README_MD,
        &[
            ("name", ctx.name),
            ("author", ctx.author),
            ("platform_list", &platform_list),
            ("engine_layout_line", &engine_layout_line),
            ("engine_note", &engine_note),
        ],
    )
}

/// `xmake.lua`
pub fn build_descriptor(ctx: &TemplateContext) -> String {
    let header = render_xmake_header(ctx);

    let engine = match ctx.engine {
        EngineMode::Clone => render(
            embedded::XMAKE_ENGINE_CLONE,
            &[
                ("engine_dir", paths::project::ENGINE_DIR),
                ("devkitpro_default", DEVKITPRO_DEFAULT_ROOT),
            ],
        ),
        EngineMode::Package => {
            let engine_root = lua_path(ctx.engine_root);
            render(
                embedded::XMAKE_ENGINE_PACKAGE,
                &[
                    ("engine_root", &engine_root),
                    ("package_repo", ctx.package_repo),
                ],
            )
        }
    };

    let engine_link = match ctx.engine {
        EngineMode::Clone => "add_deps(\"extra2d\")",
        EngineMode::Package => "add_packages(\"extra2d\")",
    };

    let platform_blocks = render_platform_blocks(ctx);
    let target = render(
        embedded::XMAKE_TARGET,
        &[
            ("engine_link", engine_link),
            ("platform_blocks", &platform_blocks),
            ("name", ctx.name),
        ],
    );

    format!("{header}\n{engine}{target}")
}

fn render_xmake_header(ctx: &TemplateContext) -> String {
    let ids: Vec<&str> = TargetPlatform::ALL.iter().map(|p| p.xmake_id()).collect();
    let supported_plats = ids
        .iter()
        .map(|id| format!("{id} = true"))
        .collect::<Vec<_>>()
        .join(", ");
    let platform_names = TargetPlatform::ALL
        .iter()
        .map(|p| p.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    let mut arch_selection = String::new();
    for (i, platform) in TargetPlatform::ALL.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "elseif" };
        arch_selection.push_str(&format!(
            "{keyword} target_plat == \"{}\" then\n    set_arch(\"{}\")\n",
            platform.xmake_id(),
            platform.arch()
        ));
    }
    arch_selection.push_str("end");

    render(
        embedded::XMAKE_HEADER,
        &[
            ("name", ctx.name),
            ("platform_names", &platform_names),
            ("supported_plats", &supported_plats),
            ("supported_list", &ids.join(", ")),
            ("fallback_plat", TargetPlatform::Mingw.xmake_id()),
            ("arch_selection", &arch_selection),
        ],
    )
}

fn render_platform_blocks(ctx: &TemplateContext) -> String {
    let author = lua_escape(ctx.author);
    let mut out = String::new();
    for (i, platform) in TargetPlatform::ALL.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "elseif" };
        let (comment, condition, body) = match platform {
            TargetPlatform::Mingw => (
                "Windows",
                "is_plat(\"mingw\", \"windows\")",
                embedded::XMAKE_POST_BUILD_MINGW,
            ),
            TargetPlatform::Switch => (
                "Nintendo Switch",
                "is_plat(\"switch\")",
                embedded::XMAKE_POST_BUILD_SWITCH,
            ),
        };
        let body = render(
            body,
            &[
                ("target_dir", platform.target_dir()),
                ("devkitpro_default", DEVKITPRO_DEFAULT_ROOT),
                ("author_lua", &author),
                ("name", ctx.name),
            ],
        );
        out.push_str(&format!(
            "    -- {comment}\n    {keyword} {condition} then\n{body}\n"
        ));
    }
    out.push_str("    end");
    out
}

/// Escape a value placed inside a double-quoted Lua string
fn lua_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Decimal byte escapes, always three digits
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\{byte:03}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Forward-slash path for embedding in xmake scripts
fn lua_path(path: &Path) -> String {
    lua_escape(&path.to_string_lossy().replace('\\', "/"))
}
