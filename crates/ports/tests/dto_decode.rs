use script_lines_ports::{QuestDto, WarDto};

const WAR_JSON: &str = r#"{
  "id": 100,
  "coordinates": [],
  "age": "-",
  "name": "Fuyuki",
  "longName": "Singularity F: Flame Contaminated City Fuyuki",
  "spots": [
    {
      "id": 10001,
      "name": "Bridge",
      "quests": [
        {
          "id": 1000001,
          "name": "Burning City",
          "type": "main",
          "phaseScripts": [
            { "phase": 1, "scripts": [
              { "scriptId": "0100000111", "script": "https://static.atlasacademy.io/JP/Script/01/0100000111.txt" },
              { "scriptId": "0100000112", "script": "https://static.atlasacademy.io/JP/Script/01/0100000112.txt" }
            ] }
          ]
        },
        { "id": 94000001, "name": "Training", "type": "free", "phaseScripts": [] }
      ]
    },
    { "id": 10002, "name": "School" }
  ]
}"#;

#[test]
fn war_payload_decodes_ignoring_unknown_fields() {
    let war: WarDto = serde_json::from_str(WAR_JSON).expect("valid war json");
    assert_eq!(war.name, "Fuyuki");
    assert_eq!(war.spots.len(), 2);
    assert!(war.spots[1].quests.is_empty());

    let quests = &war.spots[0].quests;
    assert!(quests[0].is_main());
    assert!(!quests[1].is_main());
    let ids: Vec<_> = quests[0].script_refs().map(|s| s.script_id.as_str()).collect();
    assert_eq!(ids, ["0100000111", "0100000112"]);
}

#[test]
fn quest_without_phase_scripts_has_no_refs() {
    let quest: QuestDto =
        serde_json::from_str(r#"{"id": 4000327, "name": "Appendix", "type": "main"}"#).expect("valid quest json");
    assert_eq!(quest.id, 4_000_327);
    assert_eq!(quest.script_refs().count(), 0);
}
