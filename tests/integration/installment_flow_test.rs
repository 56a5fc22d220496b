// Integration tests for installment plan creation
//
// A plan is validated in full before a single request is sent; anything
// invalid must never reach the backend.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use registrar_ledger::client::{Method, Session};
use registrar_ledger::core::AppError;
use registrar_ledger::modules::assessments::AssessmentService;
use registrar_ledger::modules::installments::models::{InstallmentPlanRequest, PlanRow};
use registrar_ledger::modules::installments::services::InstallmentService;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn session() -> Session {
    Session::with_token("registrar-token")
}

#[tokio::test]
async fn test_custom_plan_mismatch_sends_nothing() {
    let api = RecordingTransport::new();
    let service = InstallmentService::new(api.clone());
    let mut assessment = sample_assessment(7);

    let request = InstallmentPlanRequest::Custom {
        rows: vec![
            PlanRow::new(date(2025, 6, 1), "Prelims", dec!(8000.00)),
            PlanRow::new(date(2025, 7, 1), "Finals", dec!(7999.99)),
        ],
    };

    let err = service
        .create_plan(&session(), &mut assessment, &request)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "amount mismatch");
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_default_plan_is_posted_once() {
    let api = RecordingTransport::new();
    let mut assessment = sample_assessment(7);

    let created: Vec<Value> = (0..5)
        .map(|k| {
            let inst = sample_installment(100 + k, dec!(3200.00), Decimal::ZERO);
            installment_json(&inst)
        })
        .collect();
    api.reply_with(Value::Array(created));

    let service = InstallmentService::new(api.clone());
    let request = InstallmentPlanRequest::Default {
        start_date: Some(date(2025, 6, 1)),
        interval_days: None,
    };

    let installments = service
        .create_plan(&session(), &mut assessment, &request)
        .await
        .unwrap();
    assert_eq!(installments.len(), 5);

    let call = api.last_call();
    assert_eq!(api.call_count(), 1);
    assert_eq!(call.method, Method::POST);
    assert_eq!(call.path, "/assessments/7/installments");
    assert_eq!(call.token.as_deref(), Some("registrar-token"));

    let body = call.body.expect("plan body");
    assert_eq!(body["plan_type"], "default");
    let rows = body["installments"].as_array().expect("installment rows");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["due_date"], "2025-06-01");
    assert_eq!(rows[4]["due_date"], "2025-09-29");
    for row in rows {
        assert_eq!(row["amount"], "3200.00");
    }
}

#[tokio::test]
async fn test_custom_plan_matching_total_is_posted() {
    let api = RecordingTransport::new();
    api.reply_with(json!([]));
    let service = InstallmentService::new(api.clone());

    let request = InstallmentPlanRequest::Custom {
        rows: vec![
            PlanRow::new(date(2025, 6, 1), "Down payment", dec!(6000.00)),
            PlanRow::new(date(2025, 7, 1), "Midterms", dec!(5000.00)),
            PlanRow::new(date(2025, 8, 1), "Finals", dec!(5000.00)),
        ],
    };

    service
        .create_plan(&session(), &mut sample_assessment(7), &request)
        .await
        .unwrap();

    let body = api.last_call().body.expect("plan body");
    assert_eq!(body["plan_type"], "custom");
    assert_eq!(body["installments"][0]["description"], "Down payment");
}

#[tokio::test]
async fn test_existing_installments_block_a_new_plan() {
    let api = RecordingTransport::new();
    let service = InstallmentService::new(api.clone());

    let mut assessment = sample_assessment(7);
    assessment
        .installments
        .push(sample_installment(1, dec!(16000.00), Decimal::ZERO));

    let err = service
        .create_plan(
            &session(),
            &mut assessment,
            &InstallmentPlanRequest::Full {
                due_date: Some(date(2025, 6, 15)),
                description: None,
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_list_installments_sorted_by_due_date() {
    let api = RecordingTransport::new();
    let mut later = sample_installment(2, dec!(100.00), Decimal::ZERO);
    later.due_date = date(2025, 9, 1);
    let earlier = sample_installment(3, dec!(100.00), Decimal::ZERO);
    api.reply_with(json!([installment_json(&later), installment_json(&earlier)]));

    let service = InstallmentService::new(api.clone());
    let installments = service.get_installments(&session(), 1).await.unwrap();

    let ids: Vec<i64> = installments.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(api.last_call().method, Method::GET);
    assert_eq!(api.last_call().path, "/assessments/1/installments");
}

#[tokio::test]
async fn test_plan_from_enrollment_assessment() {
    let api = RecordingTransport::new();
    api.reply_with(Value::Null);
    let mut fresh = sample_assessment_json(7);
    fresh["installments"] = json!([]);
    api.reply_with(fresh);
    api.reply_with(json!([]));

    let assessments = AssessmentService::new(api.clone());
    let installments = InstallmentService::new(api.clone());

    // Not assessed yet
    assert!(assessments
        .get_for_enrollment(&session(), 40)
        .await
        .unwrap()
        .is_none());

    let mut assessment = assessments
        .get_for_enrollment(&session(), 40)
        .await
        .unwrap()
        .expect("assessment");
    assert!(assessment.can_create_plan());

    installments
        .create_plan(
            &session(),
            &mut assessment,
            &InstallmentPlanRequest::Full {
                due_date: Some(date(2025, 6, 15)),
                description: None,
            },
        )
        .await
        .unwrap();

    let calls = api.calls();
    assert_eq!(calls[0].path, "/enrollments/40/assessment");
    assert_eq!(calls[0].method, Method::GET);
    let body = calls[2].body.clone().expect("plan body");
    assert_eq!(body["plan_type"], "full");
    assert_eq!(body["installments"][0]["amount"], "16000.00");
    assert_eq!(body["installments"][0]["description"], "Full payment");
}

#[tokio::test]
async fn test_accepted_plan_blocks_a_second_submission() {
    let api = RecordingTransport::new();
    let mut created = sample_installment(101, dec!(16000.00), Decimal::ZERO);
    created.assessment_id = 7;
    api.reply_with(json!([installment_json(&created)]));
    api.reply_with(json!([installment_json(&created)]));

    let service = InstallmentService::new(api.clone());
    let mut assessment = sample_assessment(7);
    let request = InstallmentPlanRequest::Full {
        due_date: Some(date(2025, 6, 15)),
        description: None,
    };

    service
        .create_plan(&session(), &mut assessment, &request)
        .await
        .unwrap();
    assert_eq!(assessment.installments, vec![created]);
    assert!(!assessment.can_create_plan());

    let err = service
        .create_plan(&session(), &mut assessment, &request)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(api.call_count(), 1);
}
