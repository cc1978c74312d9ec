use ferrum_stu3::{
    AdministrativeGender, Attachment, Bundle, BundleType, Composition, Condition,
    ConditionAbatement, ConditionOnset, DataElement, Decimal, DocumentReference,
    ElementDefinitionDefaultValue, ElementDefinitionExampleValue, ElementDefinitionFixed,
    ElementDefinitionMaxValue, ElementDefinitionMinValue, ElementDefinitionPattern, Error,
    Extension, ExtensionValue, HTTPVerb, MedicationRequest, MedicationRequestMedication, NameUse,
    Observation, ObservationStatus, ObservationValue, Organization, Patient, PatientDeceased,
    Quantity, Resource,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::{fs, fs::File, path::PathBuf};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_json(relative: &str) -> Value {
    let path = fixtures_root().join(relative);
    assert!(path.exists(), "fixture missing at {:?}", path);

    let file = File::open(&path).expect("failed to open fixture");
    serde_json::from_reader(file).expect("fixture is not valid JSON")
}

fn load_fixture<T: DeserializeOwned>(relative: &str) -> T {
    serde_json::from_value(load_json(relative)).expect("failed to deserialize fixture")
}

#[test]
fn parse_stu3_observation_genetics_example() {
    let obs: Observation = load_fixture("stu3/observation-example-genetics-1.json");

    assert_eq!(obs.id.as_deref(), Some("example-genetics-1"));
    assert_eq!(obs.status, ObservationStatus::Final);

    let coding = &obs.code.coding.as_ref().expect("code.coding")[0];
    assert_eq!(coding.code.as_deref(), Some("55233-1"));
    assert_eq!(coding.system.as_deref(), Some("http://loinc.org"));

    let extensions = obs.extension.as_ref().expect("extensions should be present");
    assert_eq!(extensions.len(), 4);
    assert_eq!(
        extensions[0].url,
        "http://hl7.org/fhir/StructureDefinition/observation-geneticsDNASequenceVariantName"
    );
    match &extensions[0].value {
        Some(ExtensionValue::CodeableConcept(concept)) => {
            assert_eq!(concept.text.as_deref(), Some("NG_007726.3:g.146252T>G"));
        }
        other => panic!("unexpected extension value: {:?}", other),
    }
    assert_eq!(
        extensions[2].value,
        Some(ExtensionValue::String("Exon 21".to_string()))
    );

    assert_eq!(
        obs.issued.as_ref().map(ToString::to_string).as_deref(),
        Some("2013-04-03T15:30:10+01:00")
    );
    assert_eq!(
        obs.specimen.as_ref().and_then(|r| r.reference.as_deref()),
        Some("Specimen/genetics-example1-somatic")
    );

    match &obs.value {
        Some(ObservationValue::CodeableConcept(concept)) => {
            let coding = &concept.coding.as_ref().expect("value coding")[0];
            assert_eq!(coding.code.as_deref(), Some("10828004"));
            assert_eq!(coding.display.as_deref(), Some("Positive"));
        }
        other => panic!("unexpected value[x]: {:?}", other),
    }
}

#[test]
fn parse_stu3_patient_example() {
    let patient: Patient = load_fixture("stu3/patient-example.json");

    assert_eq!(patient.id.as_deref(), Some("example"));
    assert_eq!(patient.active, Some(true));
    assert_eq!(patient.gender, Some(AdministrativeGender::Male));
    assert_eq!(patient.deceased, Some(PatientDeceased::Boolean(false)));

    let names = patient.name.as_ref().expect("names should be present");
    assert_eq!(names.len(), 3);
    assert_eq!(names[0].r#use, Some(NameUse::Official));
    assert_eq!(names[2].r#use, Some(NameUse::Maiden));
    assert_eq!(
        names[0].given.as_deref(),
        Some(&["Peter".to_string(), "James".to_string()][..])
    );

    let birth_date = patient.birth_date.as_ref().expect("birthDate");
    assert_eq!(birth_date.to_string(), "1974-12-25");

    let identifier = &patient.identifier.as_ref().expect("identifier")[0];
    let assigner = identifier.assigner.as_ref().expect("assigner");
    assert_eq!(assigner.display.as_deref(), Some("Acme Healthcare"));

    let contact = &patient.contact.as_ref().expect("contact")[0];
    assert_eq!(contact.gender, Some(AdministrativeGender::Female));
    assert_eq!(
        contact.name.as_ref().and_then(|n| n.family.as_deref()),
        Some("du Marché")
    );
}

/// Every fixture except `patient-example.json`, whose `_birthDate` companion is
/// dropped on decode
fn round_trip_fixtures() -> Vec<String> {
    let dir = fixtures_root().join("stu3");
    let mut names: Vec<String> = fs::read_dir(&dir)
        .expect("fixture directory")
        .map(|entry| {
            let entry = entry.expect("fixture entry");
            entry.file_name().to_string_lossy().into_owned()
        })
        .filter(|name| name.ends_with(".json") && name != "patient-example.json")
        .collect();
    names.sort();
    names
}

#[test]
fn stu3_examples_round_trip() {
    let fixtures = round_trip_fixtures();
    assert!(fixtures.len() >= 55, "only {} fixtures found", fixtures.len());

    for name in fixtures {
        let fixture = format!("stu3/{}", name);
        let source = load_json(&fixture);
        let resource = Resource::from_value(source.clone())
            .unwrap_or_else(|err| panic!("{}: {}", fixture, err));
        assert_eq!(
            Some(resource.resource_type()),
            source["resourceType"].as_str(),
            "{}",
            fixture
        );
        let output = resource.to_value().expect("failed to serialize");
        assert_eq!(output, source, "{} did not round-trip", fixture);
    }
}

#[test]
fn fixture_decimals_are_written_back_verbatim() {
    for (fixture, spellings) in [
        ("stu3/visionprescription-example.json", &["-2.00", "-0.50", "14.0"][..]),
        ("stu3/observation-example-sample-data.json", &["1.612E0", "0.250", "-3300.0"][..]),
        ("stu3/bundle-searchset.json", &["0.50", "2.5e-1", "16.200"][..]),
        ("stu3/parameters-example.json", &["0.8500", "1.5e-3", "3.140"][..]),
    ] {
        let text = fs::read_to_string(fixtures_root().join(fixture)).expect("fixture text");
        let resource =
            Resource::from_json(&text).unwrap_or_else(|err| panic!("{}: {}", fixture, err));
        let output = serde_json::to_string(&resource).unwrap();
        for spelling in spellings {
            assert!(
                output.contains(&format!(":{}", spelling)),
                "{} lost {}: {}",
                fixture,
                spelling,
                output
            );
        }
    }
}

#[test]
fn primitive_extension_companions_are_dropped() {
    let mut source = load_json("stu3/patient-example.json");
    let patient: Patient = serde_json::from_value(source.clone()).unwrap();
    let output = serde_json::to_value(&patient).unwrap();

    source
        .as_object_mut()
        .unwrap()
        .remove("_birthDate")
        .expect("fixture carries _birthDate");
    assert_eq!(output, source);
}

#[test]
fn bundle_entries_decode_as_resources() {
    let bundle: Bundle = load_fixture("stu3/bundle-transaction.json");

    assert_eq!(bundle.r#type, BundleType::Transaction);
    let entries = bundle.entry.as_ref().expect("entries");
    assert_eq!(entries.len(), 4);

    let patient = entries[0]
        .resource
        .as_ref()
        .and_then(|r| r.downcast_ref::<Patient>())
        .expect("first entry is a Patient");
    assert_eq!(patient.gender, Some(AdministrativeGender::Male));

    let condition = entries[1]
        .resource
        .as_ref()
        .and_then(|r| r.downcast_ref::<Condition>())
        .expect("second entry is a Condition");
    assert_eq!(condition.abatement, Some(ConditionAbatement::Boolean(true)));
    assert!(matches!(condition.onset, Some(ConditionOnset::DateTime(_))));

    let methods: Vec<HTTPVerb> = entries
        .iter()
        .map(|e| e.request.as_ref().expect("request").method)
        .collect();
    assert_eq!(
        methods,
        vec![HTTPVerb::Post, HTTPVerb::Post, HTTPVerb::Delete, HTTPVerb::Get]
    );
    assert!(entries[2].resource.is_none());
}

#[test]
fn patient_with_two_members() {
    let source = json!({"resourceType": "Patient", "active": true, "gender": "female"});
    let patient: Patient = serde_json::from_value(source.clone()).unwrap();

    assert_eq!(patient.active, Some(true));
    assert_eq!(patient.gender, Some(AdministrativeGender::Female));
    assert!(patient.id.is_none());
    assert!(patient.name.is_none());
    assert!(patient.deceased.is_none());
    assert!(patient.multiple_birth.is_none());

    let output = serde_json::to_value(&patient).unwrap();
    assert_eq!(output, source);
    assert_eq!(output.as_object().unwrap().len(), 3);
}

#[test]
fn composition_without_date_is_rejected() {
    let err = ferrum_stu3::json::from_value::<Composition>(json!({
        "resourceType": "Composition",
        "status": "final",
        "type": {"text": "Discharge summary"},
        "subject": {"reference": "Patient/example"},
        "author": [{"reference": "Practitioner/xcda-author"}],
        "title": "Consultation Note"
    }))
    .unwrap_err();

    match err {
        Error::Decode { type_name, source } => {
            assert_eq!(type_name, "Composition");
            assert!(source.to_string().contains("missing field `date`"), "{}", source);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn condition_abatement_round_trips() {
    let source = json!({
        "resourceType": "Condition",
        "subject": {"reference": "Patient/example"},
        "abatementBoolean": true
    });
    let condition: Condition = serde_json::from_value(source.clone()).unwrap();

    assert_eq!(condition.abatement, Some(ConditionAbatement::Boolean(true)));
    assert_eq!(serde_json::to_value(&condition).unwrap(), source);
}

#[test]
fn condition_with_two_abatement_members_is_rejected() {
    let err = Resource::from_value(json!({
        "resourceType": "Condition",
        "subject": {"reference": "Patient/example"},
        "abatementBoolean": true,
        "abatementString": "in remission"
    }))
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Condition"), "{}", message);
    assert!(message.contains("abatement[x]"), "{}", message);
}

#[test]
fn nested_attachment_keeps_its_own_id_and_extension() {
    let source = json!({
        "resourceType": "DocumentReference",
        "id": "example",
        "extension": [{"url": "http://example.org/doc-level", "valueString": "outer"}],
        "status": "current",
        "type": {"text": "Outpatient Note"},
        "indexed": "2005-12-24T09:43:41+11:00",
        "content": [
            {
                "id": "content-1",
                "attachment": {
                    "id": "attachment-1",
                    "extension": [{"url": "http://example.org/attachment-level", "valueInteger": 3}],
                    "contentType": "application/hl7-v3+xml",
                    "url": "http://example.org/xds/mhd/Binary/07a6483f-732b-461e-86b6-edb665c45510",
                    "size": 3654,
                    "hash": "2jmj7l5rSw0yVb/vlWAYkK/YBwk="
                },
                "format": {
                    "system": "urn:oid:1.3.6.1.4.1.19376.1.2.3",
                    "code": "urn:ihe:pcc:handp:2008"
                }
            }
        ]
    });

    let document: DocumentReference = serde_json::from_value(source.clone()).unwrap();

    let content = &document.content[0];
    assert_eq!(content.id.as_deref(), Some("content-1"));
    assert!(content.extension.is_none());

    let attachment: &Attachment = &content.attachment;
    assert_eq!(attachment.id.as_deref(), Some("attachment-1"));
    let nested: &[Extension] = attachment.extension.as_deref().unwrap();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].url, "http://example.org/attachment-level");
    assert_eq!(nested[0].value, Some(ExtensionValue::Integer(3)));

    let outer = document.extension.as_deref().unwrap();
    assert_eq!(outer[0].url, "http://example.org/doc-level");

    assert_eq!(serde_json::to_value(&document).unwrap(), source);
}

#[test]
fn unknown_codes_are_rejected() {
    let err = serde_json::from_value::<Patient>(json!({
        "resourceType": "Patient",
        "gender": "robot"
    }))
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("unknown variant `robot`"), "{}", message);
    assert!(message.contains("female"), "{}", message);
}

#[test]
fn mandatory_choice_group_must_be_present() {
    let err = ferrum_stu3::json::from_value::<MedicationRequest>(json!({
        "resourceType": "MedicationRequest",
        "intent": "order",
        "subject": {"reference": "Patient/example"}
    }))
    .unwrap_err();
    assert!(err.to_string().contains("medication[x]"), "{}", err);

    let request: MedicationRequest = serde_json::from_value(json!({
        "resourceType": "MedicationRequest",
        "intent": "order",
        "subject": {"reference": "Patient/example"},
        "medicationReference": {"reference": "Medication/med0316"}
    }))
    .unwrap();
    assert!(matches!(
        request.medication,
        MedicationRequestMedication::Reference(_)
    ));
}

#[test]
fn typed_decode_rejects_a_foreign_resource_type() {
    let err = serde_json::from_value::<Patient>(json!({"resourceType": "Observation"}))
        .unwrap_err();
    assert!(err.to_string().contains("Observation"), "{}", err);
}

#[test]
fn type_mismatch_names_the_field_type() {
    let err = serde_json::from_value::<Patient>(json!({
        "resourceType": "Patient",
        "active": "yes"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("expected a boolean"), "{}", err);
}

#[test]
fn missing_mandatory_fields_name_the_resource_and_field() {
    for (source, type_name, field) in [
        (
            json!({"resourceType": "Condition", "clinicalStatus": "active"}),
            "Condition",
            "subject",
        ),
        (
            json!({"resourceType": "Bundle", "entry": []}),
            "Bundle",
            "type",
        ),
    ] {
        match Resource::from_value(source) {
            Err(Error::Decode {
                type_name: failed,
                source,
            }) => {
                assert_eq!(failed, type_name);
                let expected = format!("missing field `{}`", field);
                assert!(source.to_string().contains(&expected), "{}", source);
            }
            other => panic!("{} decoded unexpectedly: {:?}", type_name, other),
        }
    }
}

#[test]
fn decimal_values_keep_their_precision() {
    let text = r#"{"resourceType":"Observation","status":"final","code":{"text":"Weight"},"valueQuantity":{"value":185,"unit":"lbs"},"component":[{"code":{"text":"a"},"valueQuantity":{"value":1.50}},{"code":{"text":"b"},"valueQuantity":{"value":1e2}}]}"#;

    let observation: Observation = ferrum_stu3::json::from_str(text).unwrap();
    match &observation.value {
        Some(ObservationValue::Quantity(quantity)) => {
            assert_eq!(quantity.value, Some(Decimal::from(185)));
        }
        other => panic!("unexpected value[x]: {:?}", other),
    }
    let components = observation.component.as_ref().expect("components");
    match &components[0].value {
        Some(ferrum_stu3::ObservationComponentValue::Quantity(quantity)) => {
            let value = quantity.value.as_ref().expect("value");
            assert_eq!(value.to_string(), "1.50");
            assert_eq!(value.to_rust_decimal().map(|d| d.scale()), Some(2));
        }
        other => panic!("unexpected component value[x]: {:?}", other),
    }

    assert_eq!(ferrum_stu3::json::to_string(&observation).unwrap(), text);
}

#[test]
fn empty_mandatory_lists_name_the_member() {
    let err = Resource::from_value(json!({
        "resourceType": "DocumentReference",
        "status": "current",
        "type": {"text": "Outpatient Note"},
        "indexed": "2005-12-24T09:43:41+11:00",
        "content": []
    }))
    .unwrap_err();
    match err {
        Error::Decode { type_name, source } => {
            assert_eq!(type_name, "DocumentReference");
            assert!(
                source
                    .to_string()
                    .contains("`content` must contain at least one element"),
                "{}",
                source
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = Resource::from_value(json!({
        "resourceType": "Provenance",
        "target": [{"reference": "Procedure/example"}],
        "recorded": "2015-06-27T08:39:24+10:00",
        "agent": [{"whoUri": "urn:oid:1.2.3.4.5"}],
        "signature": [{
            "type": [],
            "when": "2015-06-27T08:39:24+10:00",
            "whoUri": "urn:oid:1.2.3.4.5"
        }]
    }))
    .unwrap_err();
    assert!(
        err.to_string().contains("`type` must contain at least one element"),
        "{}",
        err
    );
}

#[test]
fn types_without_mandatory_members_have_defaults() {
    let organization = Organization {
        name: Some("Acme".to_string()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&organization).unwrap(),
        json!({"resourceType": "Organization", "name": "Acme"})
    );

    let quantity = Quantity {
        value: Some("0.50".parse().unwrap()),
        unit: Some("mg".to_string()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&quantity).unwrap(),
        r#"{"value":0.50,"unit":"mg"}"#
    );
}

#[test]
fn element_definition_choice_groups() {
    let data_element: DataElement = load_fixture("stu3/dataelement-example.json");
    let elements = &data_element.element;
    assert_eq!(elements.len(), 4);

    let gender = &elements[0];
    assert!(matches!(
        gender.default_value,
        Some(ElementDefinitionDefaultValue::CodeableConcept(_))
    ));
    assert!(matches!(
        gender.pattern,
        Some(ElementDefinitionPattern::CodeableConcept(_))
    ));
    assert!(gender.fixed.is_none());
    assert!(gender.min_value.is_none());

    let weight = &elements[1];
    match &weight.fixed {
        Some(ElementDefinitionFixed::Quantity(quantity)) => {
            assert_eq!(quantity.code.as_deref(), Some("kg"));
        }
        other => panic!("unexpected fixed[x]: {:?}", other),
    }
    let examples = weight.example.as_ref().expect("examples");
    assert!(matches!(
        examples[0].value,
        ElementDefinitionExampleValue::Quantity(_)
    ));
    assert_eq!(
        examples[1].value,
        ElementDefinitionExampleValue::Decimal("72.125".parse().unwrap())
    );
    match &weight.min_value {
        Some(ElementDefinitionMinValue::Quantity(quantity)) => {
            let value = quantity.value.as_ref().map(ToString::to_string);
            assert_eq!(value.as_deref(), Some("0.500"));
        }
        other => panic!("unexpected minValue[x]: {:?}", other),
    }
    assert_eq!(
        weight.max_value,
        Some(ElementDefinitionMaxValue::Decimal("650.0".parse().unwrap()))
    );

    let confidence = &elements[2];
    assert_eq!(
        confidence.default_value,
        Some(ElementDefinitionDefaultValue::Decimal("1.00".parse().unwrap()))
    );
    assert_eq!(
        confidence.fixed,
        Some(ElementDefinitionFixed::Decimal("0.95".parse().unwrap()))
    );
    assert_eq!(confidence.max_value, Some(ElementDefinitionMaxValue::Integer(1)));

    let recorded = &elements[3];
    assert_eq!(
        recorded.default_value,
        Some(ElementDefinitionDefaultValue::Boolean(false))
    );
    match (&recorded.min_value, &recorded.max_value) {
        (
            Some(ElementDefinitionMinValue::DateTime(min)),
            Some(ElementDefinitionMaxValue::Instant(max)),
        ) => {
            assert_eq!(min.to_string(), "1900-01-01T00:00:00-00:00");
            assert_eq!(max.to_string(), "2016-12-31T23:59:60Z");
        }
        other => panic!("unexpected bounds: {:?}", other),
    }
}

#[test]
fn element_definition_rejects_two_fixed_members() {
    let err = serde_json::from_value::<DataElement>(json!({
        "resourceType": "DataElement",
        "status": "draft",
        "element": [{
            "path": "Gender",
            "fixedString": "male",
            "fixedCode": "male"
        }]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("fixed[x]"), "{}", err);

    let err = serde_json::from_value::<DataElement>(json!({
        "resourceType": "DataElement",
        "status": "draft",
        "element": []
    }))
    .unwrap_err();
    assert!(
        err.to_string().contains("`element` must contain at least one element"),
        "{}",
        err
    );
}
