//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Lay out a realistic content directory: bilingual message tables plus a
/// small docs tree (including a locale-suffixed duplicate that the builder
/// must skip).
pub fn write_content_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_messages(dir.path());
    write_docs(dir.path());
    dir
}

/// Message tables only, no docs directory.
pub fn write_content_fixture_without_docs() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_messages(dir.path());
    dir
}

fn write_messages(root: &Path) {
    let messages = root.join("messages");
    fs::create_dir_all(&messages).unwrap();

    let zh = serde_json::json!({
        "services": {
            "model-deployment": {
                "title": "模型部署",
                "description": "企业级模型私有化部署",
                "details": "提供端到端的模型部署与推理优化服务，覆盖云端与边缘环境。"
            },
            "model-application": {
                "title": "模型应用",
                "description": "大模型应用落地",
                "details": "围绕业务场景构建大模型应用，从需求分析到上线运营。"
            },
            "agent-development": {
                "title": "智能体开发",
                "description": "定制化智能体研发",
                "details": "为企业定制可靠的智能体系统与工作流自动化。"
            }
        }
    });
    let en = serde_json::json!({
        "services": {
            "model-deployment": {
                "title": "Model Deployment",
                "description": "Enterprise model hosting",
                "details": "End-to-end model deployment and inference optimization across cloud and edge."
            },
            "model-application": {
                "title": "Model Applications",
                "description": "LLM applications in production",
                "details": "LLM applications built around your business, from discovery to operations."
            },
            "agent-development": {
                "title": "Agent Development",
                "description": "Custom agent engineering",
                "details": "Reliable agent systems and workflow automation tailored to the enterprise."
            }
        }
    });

    fs::write(
        messages.join("zh.json"),
        serde_json::to_string_pretty(&zh).unwrap(),
    )
    .unwrap();
    fs::write(
        messages.join("en.json"),
        serde_json::to_string_pretty(&en).unwrap(),
    )
    .unwrap();
}

fn write_docs(root: &Path) {
    let docs = root.join("docs");
    fs::create_dir_all(&docs).unwrap();

    fs::write(
        docs.join("faq.md"),
        "---\ntitle: 常见问题\ndescription: 常见问题解答\ncategory: 指南\ntags:\n  - 合作\n---\n\
         ## 如何开始合作\n\n通过[联系页面](/contact)预约咨询，我们会在一个工作日内回复。\n",
    )
    .unwrap();
    fs::write(
        docs.join("deploy-guide.md"),
        "---\ntitle: 部署指南\ndescription: 模型部署步骤\n---\n# 准备环境\n\n按照以下步骤将模型部署到生产环境。\n",
    )
    .unwrap();
    fs::write(
        docs.join("privacy-policy.md"),
        "---\ntitle: 隐私政策\n---\n我们如何处理您的数据。\n",
    )
    .unwrap();
    // English duplicate of the canonical article above; must be skipped
    fs::write(
        docs.join("privacy-policy-en.md"),
        "---\ntitle: Privacy Policy\n---\nHow we handle your data.\n",
    )
    .unwrap();
}
