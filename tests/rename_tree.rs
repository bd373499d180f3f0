//! Rename pass driven by the shipped example rules.

use std::path::Path;

use remodel::rename;
use remodel::rules::RuleFile;

fn example_rules() -> RuleFile {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("rules.example.json");
    RuleFile::load(&path).unwrap()
}

#[test]
fn example_rules_fix_a_service_file() {
    let rules = example_rules();
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();

    std::fs::write(
        src.join("campaigns.service.ts"),
        concat!(
            "const campaign = await prisma.campaign.findUnique({\n",
            "  where: { id },\n",
            "  include: { sources: true },\n",
            "});\n",
            "const assets = await prisma.generatedAsset.findMany({\n",
            "  include: { generatedAssets: true },\n",
            "});\n",
            "await prisma.job.updateMany({ data: { status: 'campaign' } });\n",
        ),
    )
    .unwrap();

    let result = rename::fix_tree(dir.path(), "ts", &rules, true).unwrap();

    assert_eq!(result.total_fixed, 1);
    let fixed = std::fs::read_to_string(src.join("campaigns.service.ts")).unwrap();
    assert!(fixed.contains("prisma.campaigns.findUnique"));
    assert!(fixed.contains("include: { campaign_sources: true }"));
    assert!(fixed.contains("prisma.generated_assets.findMany"));
    assert!(fixed.contains("include: { generated_assets: true }"));
    assert!(fixed.contains("prisma.jobs.updateMany"));
    assert!(fixed.contains("status: 'campaigns'"));
}

#[test]
fn literal_matching_only_renames_the_leading_include_key() {
    // Sequential literal substitution: "include: { generatedAssets:" only
    // matches when it is the first key after the brace. A second key in the
    // same include block keeps its old name.
    let rules = example_rules();
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(
        dir.path().join("query.ts"),
        "find({ include: { sources: true, generatedAssets: true } });\n",
    )
    .unwrap();

    let result = rename::fix_tree(dir.path(), "ts", &rules, true).unwrap();

    assert_eq!(result.total_fixed, 1);
    let fixed = std::fs::read_to_string(dir.path().join("query.ts")).unwrap();
    assert_eq!(
        fixed,
        "find({ include: { campaign_sources: true, generatedAssets: true } });\n"
    );
}

#[test]
fn example_rules_are_idempotent_on_disk() {
    let rules = example_rules();
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(
        dir.path().join("worker.ts"),
        "await prisma.generatedAsset.create({ include: { asset: true } });\n",
    )
    .unwrap();

    let first = rename::fix_tree(dir.path(), "ts", &rules, true).unwrap();
    assert_eq!(first.total_fixed, 1);
    let after_first = std::fs::read_to_string(dir.path().join("worker.ts")).unwrap();

    let second = rename::fix_tree(dir.path(), "ts", &rules, true).unwrap();
    assert_eq!(second.total_fixed, 0);
    let after_second = std::fs::read_to_string(dir.path().join("worker.ts")).unwrap();
    assert_eq!(after_first, after_second);
}
