//! The architecture curriculum: roadmap ordering and lesson records
//!
//! Ten architectures taught in a fixed order, plus the structured lesson
//! record a lesson source produces for each of them. The record's wire shape
//! (camelCase field names, display-string identifiers) is the contract with
//! external lesson sources and must stay stable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CurriculumError;

/// The ten architectures of the course, in teaching order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "Rule-based systems")]
    RuleBased,
    #[serde(rename = "Classical ML pipelines")]
    ClassicalMl,
    #[serde(rename = "Deep Learning architectures")]
    DeepLearning,
    #[serde(rename = "Transformer architecture")]
    Transformer,
    #[serde(rename = "RAG (Retrieval-Augmented Generation)")]
    Rag,
    #[serde(rename = "Agent-based architecture")]
    AgentBased,
    #[serde(rename = "Multi-agent systems")]
    MultiAgent,
    #[serde(rename = "Tool-using AI systems")]
    ToolUsing,
    #[serde(rename = "Autonomous AI workflows")]
    AutonomousWorkflows,
    #[serde(rename = "AI product/system architecture (end-to-end)")]
    ProductArchitecture,
}

/// The course roadmap, first architecture to last
pub const ROADMAP: [Architecture; 10] = [
    Architecture::RuleBased,
    Architecture::ClassicalMl,
    Architecture::DeepLearning,
    Architecture::Transformer,
    Architecture::Rag,
    Architecture::AgentBased,
    Architecture::MultiAgent,
    Architecture::ToolUsing,
    Architecture::AutonomousWorkflows,
    Architecture::ProductArchitecture,
];

impl Architecture {
    /// Full display identifier, identical to the record wire form
    pub fn title(&self) -> &'static str {
        match self {
            Architecture::RuleBased => "Rule-based systems",
            Architecture::ClassicalMl => "Classical ML pipelines",
            Architecture::DeepLearning => "Deep Learning architectures",
            Architecture::Transformer => "Transformer architecture",
            Architecture::Rag => "RAG (Retrieval-Augmented Generation)",
            Architecture::AgentBased => "Agent-based architecture",
            Architecture::MultiAgent => "Multi-agent systems",
            Architecture::ToolUsing => "Tool-using AI systems",
            Architecture::AutonomousWorkflows => "Autonomous AI workflows",
            Architecture::ProductArchitecture => {
                "AI product/system architecture (end-to-end)"
            }
        }
    }

    /// Short caption for the roadmap stepper (first word of the title)
    pub fn label(&self) -> &'static str {
        match self {
            Architecture::RuleBased => "Rule-based",
            Architecture::ClassicalMl => "Classical",
            Architecture::DeepLearning => "Deep",
            Architecture::Transformer => "Transformer",
            Architecture::Rag => "RAG",
            Architecture::AgentBased => "Agent-based",
            Architecture::MultiAgent => "Multi-agent",
            Architecture::ToolUsing => "Tool-using",
            Architecture::AutonomousWorkflows => "Autonomous",
            Architecture::ProductArchitecture => "AI",
        }
    }

    /// File-name form, used for on-disk lesson records
    pub fn slug(&self) -> &'static str {
        match self {
            Architecture::RuleBased => "rule_based",
            Architecture::ClassicalMl => "classical_ml",
            Architecture::DeepLearning => "deep_learning",
            Architecture::Transformer => "transformer",
            Architecture::Rag => "rag",
            Architecture::AgentBased => "agent_based",
            Architecture::MultiAgent => "multi_agent",
            Architecture::ToolUsing => "tool_using",
            Architecture::AutonomousWorkflows => "autonomous_workflows",
            Architecture::ProductArchitecture => "product_architecture",
        }
    }

    /// Position on the roadmap, zero-based
    pub fn index(&self) -> usize {
        match self {
            Architecture::RuleBased => 0,
            Architecture::ClassicalMl => 1,
            Architecture::DeepLearning => 2,
            Architecture::Transformer => 3,
            Architecture::Rag => 4,
            Architecture::AgentBased => 5,
            Architecture::MultiAgent => 6,
            Architecture::ToolUsing => 7,
            Architecture::AutonomousWorkflows => 8,
            Architecture::ProductArchitecture => 9,
        }
    }

    pub fn from_index(index: usize) -> Option<Architecture> {
        ROADMAP.get(index).copied()
    }

    /// The architecture that follows this one on the roadmap
    pub fn next(&self) -> Result<Architecture, CurriculumError> {
        Architecture::from_index(self.index() + 1).ok_or(CurriculumError::EndOfRoadmap)
    }

    /// Look up an architecture by its display identifier
    pub fn from_title(title: &str) -> Result<Architecture, CurriculumError> {
        ROADMAP
            .iter()
            .copied()
            .find(|a| a.title() == title)
            .ok_or_else(|| CurriculumError::UnknownArchitecture(title.to_string()))
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == ROADMAP.len()
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The four component descriptions every lesson covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonComponents {
    pub model: String,
    pub data_flow: String,
    pub memory: String,
    pub orchestration: String,
}

/// A structured lesson record, the unit a lesson source produces.
///
/// Field names serialize in camelCase; `id` serializes as the architecture's
/// display identifier. Sources are trusted to fill every field; parsing
/// imposes no validation beyond this exact shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Architecture,
    pub title: String,
    pub problem: String,
    pub diagram_description: String,
    pub components: LessonComponents,
    pub previous_difference: String,
    pub current_use_cases: Vec<String>,
    pub analogy: String,
    pub when_not_to_use: String,
    pub python_snippet: String,
}
