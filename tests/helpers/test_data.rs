// Fixtures for assessments, installments and grades

use chrono::NaiveDate;
use registrar_ledger::modules::assessments::models::Assessment;
use registrar_ledger::modules::grades::models::{Grade, GradeStatus};
use registrar_ledger::modules::installments::models::Installment;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// ₱12,000 tuition + ₱3,000 misc + ₱1,500 other − ₱500 discount = ₱16,000
pub fn sample_assessment(id: i64) -> Assessment {
    Assessment {
        id,
        enrollment_id: 40,
        tuition: dec!(12000.00),
        miscellaneous: dec!(3000.00),
        other_fees: dec!(1500.00),
        discounts: dec!(500.00),
        adjustments: vec![],
        grand_total: None,
        installments: vec![],
    }
}

pub fn sample_assessment_json(id: i64) -> Value {
    json!({
        "id": id,
        "enrollment_id": 40,
        "tuition": "12000.00",
        "miscellaneous": "3000.00",
        "other_fees": "1500.00",
        "discounts": "500.00",
        "adjustments": [],
        "grand_total": null,
        "installments": [
            {
                "id": 1,
                "assessment_id": id,
                "due_date": "2025-06-01",
                "description": "Installment 1 of 5",
                "amount": "3200.00",
                "paid_amount": "3200.00",
                "is_paid": true
            },
            {
                "id": 2,
                "assessment_id": id,
                "due_date": "2025-07-01",
                "description": "Installment 2 of 5",
                "amount": "3200.00",
                "paid_amount": "0.00",
                "is_paid": false
            }
        ]
    })
}

pub fn sample_installment(id: i64, amount: Decimal, paid_amount: Decimal) -> Installment {
    Installment {
        id,
        assessment_id: 1,
        due_date: date(2025, 7, 1),
        description: format!("Installment {} of 5", id),
        amount,
        paid_amount,
        is_paid: false,
    }
}

pub fn installment_json(inst: &Installment) -> Value {
    serde_json::to_value(inst).expect("installment serializes")
}

pub fn open_grade(id: i64, scores: [Decimal; 4]) -> Grade {
    Grade {
        id,
        enrollment_id: 40,
        subject_code: format!("SUBJ{}", id),
        units: dec!(3),
        quizzes: Some(scores[0]),
        projects: Some(scores[1]),
        participation: Some(scores[2]),
        major_exams: Some(scores[3]),
        final_numeric: None,
        grade_point: None,
        remarks: None,
        status: GradeStatus::Open,
    }
}
