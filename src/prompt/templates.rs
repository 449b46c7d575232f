//! Built-in system prompt templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of the built-in template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => Err(format!("unknown locale '{}' (expected 'en' or 'zh')", other)),
        }
    }
}

/// The built-in template for `locale`.
pub fn builtin_template(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_TEMPLATE,
        Locale::Zh => ZH_TEMPLATE,
    }
}

const EN_TEMPLATE: &str = r#"You are an autonomous coding agent working inside a software project. You complete tasks by calling the tools listed below, one at a time, and reading their results.

## Environment Information

- OS: {{os_info}}
- Project path: {{project_path}}
- Current file: {{current_file}}
- Build tool: {{build_tool}}
- Shell: {{shell}}
- Time: {{timestamp}}

### Project Structure

{{project_structure}}

### Modules

{{module_info}}

### Framework

{{framework_context}}

## Available Tools

Each tool is described with a JSON Schema for parameter validation. Only the listed parameters are accepted, and every parameter named in `required` must be present.

{{tool_list}}

## Tool Usage Format

Call a tool by writing a slash command with its name, followed by a JSON object with the parameters in a fenced `json` block:

/read-file
```json
{"path": "src/main.ts"}
```

## Task Execution Guidelines

1. **One Tool Per Response**: call exactly one tool, then wait for its result before deciding the next step.
2. **Read Before Writing**: inspect existing files before changing them.
3. **Verify Changes**: run the build or tests with `{{build_tool}}` after editing code.
4. **Stay Inside the Project**: use paths relative to the project root.

### Project Rules

{{agent_rules}}

## Response Format

Start with a short explanation of what you are about to do, then give the tool call. When the task is complete, summarize the changes without calling a tool."#;

const ZH_TEMPLATE: &str = r#"你是一个在软件项目中工作的自主编程智能体。你通过调用下面列出的工具来完成任务，每次只调用一个工具，并阅读其结果。

## 环境信息 (Environment Information)

- 操作系统: {{os_info}}
- 项目路径: {{project_path}}
- 当前文件: {{current_file}}
- 构建工具: {{build_tool}}
- Shell: {{shell}}
- 时间: {{timestamp}}

### 项目结构

{{project_structure}}

### 模块

{{module_info}}

### 框架

{{framework_context}}

## 可用工具 (Available Tools)

每个工具都附带用于参数校验的 JSON Schema (JSON Schema for parameter validation)。只接受列出的参数，`required` 中的参数必须全部提供。

{{tool_list}}

## 工具使用格式 (Tool Usage Format)

使用斜杠命令加工具名来调用工具，随后在 `json` 代码块中给出参数对象：

/read-file
```json
{"path": "src/main.ts"}
```

## 任务执行指南 (Task Execution Guidelines)

1. **每次响应只用一个工具 (One Tool Per Response)**：只调用一个工具，等待结果后再决定下一步。
2. **先读后写**：修改文件之前先查看其内容。
3. **验证修改**：修改代码后使用 `{{build_tool}}` 运行构建或测试。
4. **留在项目内**：使用相对于项目根目录的路径。

### 项目规则

{{agent_rules}}

## 响应格式 (Response Format)

先简要说明你要做什么，然后给出工具调用。任务完成后，总结所做的修改，不再调用工具。"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::context::VARIABLE_NAMES;
    use crate::prompt::placeholders;
    use crate::schema::find_legacy_markup;

    const SECTIONS: [&str; 5] = [
        "Environment Information",
        "Available Tools",
        "Tool Usage Format",
        "Task Execution Guidelines",
        "Response Format",
    ];

    #[test]
    fn test_locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ZH".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!(" Zh ".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::Zh.to_string(), "zh");
    }

    #[test]
    fn test_locale_serde_is_lowercase() {
        let locale: Locale = serde_yaml::from_str("zh").unwrap();
        assert_eq!(locale, Locale::Zh);
        assert_eq!(serde_yaml::to_string(&Locale::En).unwrap().trim(), "en");
    }

    #[test]
    fn test_templates_reference_every_variable() {
        for locale in [Locale::En, Locale::Zh] {
            let names = placeholders(builtin_template(locale)).unwrap();
            for var in VARIABLE_NAMES {
                assert!(
                    names.iter().any(|n| n == var),
                    "{} template is missing {{{{{}}}}}",
                    locale,
                    var
                );
            }
            assert_eq!(names.len(), VARIABLE_NAMES.len(), "{:?}", names);
        }
    }

    #[test]
    fn test_templates_have_all_sections() {
        for locale in [Locale::En, Locale::Zh] {
            let template = builtin_template(locale);
            for section in SECTIONS {
                assert!(template.contains(section), "{} lacks {}", locale, section);
            }
            assert!(template.contains("One Tool Per Response"));
            assert!(template.contains("JSON Schema for parameter validation"));
            assert!(template.contains("/read-file\n```json\n{\"path\": \"src/main.ts\"}\n```"));
        }
    }

    #[test]
    fn test_templates_have_no_legacy_markup() {
        for locale in [Locale::En, Locale::Zh] {
            assert_eq!(find_legacy_markup(builtin_template(locale)), None);
        }
    }
}
