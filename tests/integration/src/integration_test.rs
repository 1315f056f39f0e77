//! End-to-end exercise of the codec API: build a document in memory,
//! serialize it, and parse it back through the stream-based entry points.

use pretty_assertions::assert_eq;
use sln_codec::{parse, write};
use sln_model::{
    BuildConfiguration, ConfigurationIndicator, ConfigurationMapping, ConfigurationName,
    FormatVersion, GlobalSection, NestedProject, PlatformTarget, ProductVersion,
    ProjectConfiguration, ProjectRef, SectionContent, SectionScope, SolutionDocument,
    SECTION_EXTENSIBILITY_GLOBALS, SECTION_SOLUTION_PROPERTIES,
};
use uuid::Uuid;

const CSHARP_PROJECT_TYPE: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";
const FOLDER_PROJECT_TYPE: &str = "2150E333-8FDC-42A3-9474-1A3956D46DE8";

fn build_document() -> SolutionDocument {
    let app_id = Uuid::parse_str("aaaaaaaa-0000-0000-0000-000000000001").unwrap();
    let folder_id = Uuid::parse_str("aaaaaaaa-0000-0000-0000-000000000002").unwrap();
    let debug_any = BuildConfiguration::new(ConfigurationName::Debug, PlatformTarget::AnyCpu);

    SolutionDocument {
        format_version: FormatVersion::new(12, 0),
        editor_moniker: "# Visual Studio Version 17".to_string(),
        visual_studio_version: "17.0.31903.59".parse::<ProductVersion>().unwrap(),
        minimum_visual_studio_version: "10.0.40219.1".parse::<ProductVersion>().unwrap(),
        projects: vec![
            ProjectRef::new(
                Uuid::parse_str(CSHARP_PROJECT_TYPE).unwrap(),
                "App",
                "App\\App.csproj",
                app_id,
            ),
            ProjectRef::new(
                Uuid::parse_str(FOLDER_PROJECT_TYPE).unwrap(),
                "src",
                "src",
                folder_id,
            ),
        ],
        // Stored in an arbitrary order; the writer canonicalizes.
        sections: vec![
            GlobalSection::new(
                SectionScope::PostSolution,
                SectionContent::General {
                    name: SECTION_EXTENSIBILITY_GLOBALS.to_string(),
                    lines: vec![
                        "SolutionGuid = {BBBBBBBB-0000-0000-0000-000000000003}".to_string(),
                    ],
                },
            ),
            GlobalSection::new(
                SectionScope::PreSolution,
                SectionContent::NestedProjects(vec![NestedProject {
                    child_id: app_id,
                    parent_id: folder_id,
                }]),
            ),
            GlobalSection::new(
                SectionScope::PreSolution,
                SectionContent::General {
                    name: SECTION_SOLUTION_PROPERTIES.to_string(),
                    lines: vec!["HideSolutionNode = FALSE".to_string()],
                },
            ),
            GlobalSection::new(
                SectionScope::PostSolution,
                SectionContent::ProjectConfigurations(vec![
                    ProjectConfiguration {
                        project_id: app_id,
                        solution_configuration: debug_any,
                        indicator: ConfigurationIndicator::ActiveCfg,
                        project_configuration: debug_any,
                    },
                    ProjectConfiguration {
                        project_id: app_id,
                        solution_configuration: debug_any,
                        indicator: ConfigurationIndicator::Build,
                        project_configuration: debug_any,
                    },
                ]),
            ),
            GlobalSection::new(
                SectionScope::PreSolution,
                SectionContent::SolutionConfigurations(vec![ConfigurationMapping {
                    key: debug_any,
                    value: debug_any,
                }]),
            ),
        ],
    }
}

#[test]
fn test_stream_roundtrip_through_canonical_form() {
    let document = build_document();

    let mut buffer = Vec::new();
    write(&document, &mut buffer).unwrap();
    let reparsed = parse(buffer.as_slice()).unwrap();

    assert_eq!(reparsed.format_version, document.format_version);
    assert_eq!(reparsed.projects, document.projects);
    assert_eq!(reparsed.sections.len(), document.sections.len());

    // Reparsed sections are in canonical order.
    let names: Vec<&str> = reparsed.sections.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec![
            "SolutionConfigurationPlatforms",
            "ProjectConfigurationPlatforms",
            "SolutionProperties",
            "NestedProjects",
            "ExtensibilityGlobals",
        ]
    );

    // A second pass is byte-stable.
    let mut second = Vec::new();
    write(&reparsed, &mut second).unwrap();
    assert_eq!(second, buffer);
}

#[test]
fn test_serialized_text_uses_canonical_guid_form() {
    let document = build_document();
    let mut buffer = Vec::new();
    write(&document, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("{AAAAAAAA-0000-0000-0000-000000000001}"));
    assert!(text.contains(
        "{AAAAAAAA-0000-0000-0000-000000000001} = {AAAAAAAA-0000-0000-0000-000000000002}"
    ));
    assert!(text.contains("\t\t{AAAAAAAA-0000-0000-0000-000000000001}.Debug|Any CPU.Build.0 = Debug|Any CPU\n"));
}
