//! Integration tests for bulk re-denomination: value preservation,
//! record counts, third-currency independence, and atomicity under an
//! injected mid-batch failure.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal_macros::dec;

use centime_core::budgets::{BudgetRepositoryTrait, NewBudget};
use centime_core::earnings::{EarningRepositoryTrait, NewEarning};
use centime_core::errors::Error;
use centime_core::expenses::{ExpenseRepositoryTrait, NewExpense};
use centime_core::goals::{GoalRepositoryTrait, NewGoal};
use centime_core::redenomination::{RedenominationService, RedenominationServiceTrait};
use centime_core::users::UserPreferencesRepositoryTrait;
use centime_storage_sqlite::budgets::BudgetRepository;
use centime_storage_sqlite::earnings::EarningRepository;
use centime_storage_sqlite::expenses::ExpenseRepository;
use centime_storage_sqlite::goals::GoalRepository;
use centime_storage_sqlite::redenomination::RedenominationRepository;
use centime_storage_sqlite::schema::budgets;
use centime_storage_sqlite::users::UserPreferencesRepository;

const USER: &str = "user-1";

struct Fixture {
    test_db: common::TestDb,
    earnings: EarningRepository,
    expenses: ExpenseRepository,
    budgets: BudgetRepository,
    goals: GoalRepository,
    preferences: Arc<UserPreferencesRepository>,
    service: RedenominationService,
}

async fn fixture() -> Fixture {
    let test_db = common::setup().await;
    let currencies = Arc::new(common::currency_repository(&test_db).await);
    common::seed_currencies(&currencies).await;

    let preferences = Arc::new(UserPreferencesRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
    ));
    let service = RedenominationService::new(
        Arc::new(RedenominationRepository::new(
            test_db.pool.clone(),
            test_db.writer.clone(),
        )),
        currencies.clone(),
        preferences.clone(),
    );

    Fixture {
        earnings: EarningRepository::new(test_db.pool.clone(), test_db.writer.clone()),
        expenses: ExpenseRepository::new(test_db.pool.clone(), test_db.writer.clone()),
        budgets: BudgetRepository::new(test_db.pool.clone(), test_db.writer.clone()),
        goals: GoalRepository::new(test_db.pool.clone(), test_db.writer.clone()),
        preferences,
        service,
        test_db,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_earning(id: &str, amount: rust_decimal::Decimal, currency: &str) -> NewEarning {
    NewEarning {
        id: Some(id.to_string()),
        user_id: USER.to_string(),
        name: format!("earning {}", id),
        amount,
        currency_code: Some(currency.to_string()),
        received_on: date(2025, 3, 1),
        notes: None,
    }
}

fn new_expense(id: &str, amount: rust_decimal::Decimal, currency: &str) -> NewExpense {
    NewExpense {
        id: Some(id.to_string()),
        user_id: USER.to_string(),
        name: format!("expense {}", id),
        category: None,
        amount,
        currency_code: Some(currency.to_string()),
        spent_on: date(2025, 3, 2),
        notes: None,
    }
}

fn new_budget(id: &str, amount: rust_decimal::Decimal, currency: &str) -> NewBudget {
    NewBudget {
        id: Some(id.to_string()),
        user_id: USER.to_string(),
        name: format!("budget {}", id),
        amount,
        currency_code: Some(currency.to_string()),
        period_start: date(2025, 3, 1),
        period_end: date(2025, 3, 31),
    }
}

fn new_goal(
    id: &str,
    target: rust_decimal::Decimal,
    current: rust_decimal::Decimal,
    currency: &str,
) -> NewGoal {
    NewGoal {
        id: Some(id.to_string()),
        user_id: USER.to_string(),
        name: format!("goal {}", id),
        target_amount: target,
        current_amount: current,
        currency_code: Some(currency.to_string()),
        due_on: None,
    }
}

#[tokio::test]
async fn test_redenomination_preserves_counts_and_converts_amounts() {
    let f = fixture().await;

    f.earnings.insert(new_earning("e1", dec!(100), "USD")).await.unwrap();
    f.earnings.insert(new_earning("e2", dec!(55.55), "USD")).await.unwrap();
    f.expenses.insert(new_expense("x1", dec!(100), "USD")).await.unwrap();
    // Deliberately held in a third currency; must not be rewritten.
    f.expenses.insert(new_expense("x2", dec!(20), "GBP")).await.unwrap();
    f.budgets.insert(new_budget("b1", dec!(500), "USD")).await.unwrap();
    f.goals
        .insert(new_goal("g1", dec!(1000), dec!(250), "USD"))
        .await
        .unwrap();

    let summary = f
        .service
        .change_default_currency(USER, "EUR")
        .await
        .unwrap();

    assert_eq!(summary.earnings, 2);
    assert_eq!(summary.expenses, 1);
    assert_eq!(summary.budgets, 1);
    assert_eq!(summary.goals, 1);

    let earnings = f.earnings.load_for_user(USER).unwrap();
    assert_eq!(earnings.len(), 2);
    assert!(earnings.iter().all(|e| e.currency_code == "EUR"));
    assert_eq!(earnings[0].amount, dec!(92.00));
    assert_eq!(earnings[1].amount, dec!(51.11));

    let expenses = f.expenses.load_for_user(USER).unwrap();
    assert_eq!(expenses.len(), 2);
    let converted = expenses.iter().find(|e| e.id == "x1").unwrap();
    assert_eq!((converted.amount, converted.currency_code.as_str()), (dec!(92.00), "EUR"));
    let untouched = expenses.iter().find(|e| e.id == "x2").unwrap();
    assert_eq!((untouched.amount, untouched.currency_code.as_str()), (dec!(20), "GBP"));

    let budgets = f.budgets.load_for_user(USER).unwrap();
    assert_eq!(budgets[0].amount, dec!(460.00));

    let goals = f.goals.load_for_user(USER).unwrap();
    assert_eq!(goals[0].target_amount, dec!(920.00));
    assert_eq!(goals[0].current_amount, dec!(230.00));
    assert_eq!(goals[0].currency_code, "EUR");

    // The preference switches in the same transaction.
    let preference = f.preferences.get_preference(USER).unwrap();
    assert_eq!(preference.default_currency_code, "EUR");
}

#[tokio::test]
async fn test_same_currency_change_is_a_noop() {
    let f = fixture().await;
    f.earnings.insert(new_earning("e1", dec!(100), "USD")).await.unwrap();

    let summary = f
        .service
        .change_default_currency(USER, "USD")
        .await
        .unwrap();

    assert_eq!(summary.total(), 0);
    assert_eq!(f.earnings.load_for_user(USER).unwrap()[0].amount, dec!(100));
}

#[tokio::test]
async fn test_unknown_target_currency_is_rejected() {
    let f = fixture().await;

    let err = f
        .service
        .change_default_currency(USER, "XXX")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unpriced_target_currency_is_rejected_before_any_write() {
    let f = fixture().await;
    let currencies = common::currency_repository(&f.test_db).await;
    use centime_core::currencies::CurrencyRepositoryTrait;
    currencies
        .insert(common::new_currency("CHF", "Swiss Franc", "Fr"))
        .await
        .unwrap();

    f.earnings.insert(new_earning("e1", dec!(100), "USD")).await.unwrap();

    let err = f
        .service
        .change_default_currency(USER, "CHF")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fx(_)));

    let earning = &f.earnings.load_for_user(USER).unwrap()[0];
    assert_eq!((earning.amount, earning.currency_code.as_str()), (dec!(100), "USD"));
}

#[tokio::test]
async fn test_mid_batch_failure_rolls_back_everything() {
    let f = fixture().await;

    f.earnings.insert(new_earning("e1", dec!(100), "USD")).await.unwrap();
    f.budgets.insert(new_budget("b1", dec!(10), "USD")).await.unwrap();
    f.budgets.insert(new_budget("b2", dec!(20), "USD")).await.unwrap();
    f.budgets.insert(new_budget("b3", dec!(30), "USD")).await.unwrap();

    // Corrupt the middle budget's stored amount. The rewrite processes
    // budgets in id order, so b1 is updated before the failure on b2.
    f.test_db
        .writer
        .exec(|conn| {
            diesel::update(budgets::table.find("b2"))
                .set(budgets::amount.eq("not-a-number"))
                .execute(conn)
                .map_err(|e| centime_storage_sqlite::StorageError::from(e).into())
        })
        .await
        .unwrap();

    let err = f
        .service
        .change_default_currency(USER, "EUR")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RedenominationFailed(_)));

    // Nothing the call touched is observable: the earning processed
    // before the budgets and the budget updated before the poison row
    // are both back to their original state.
    let earning = &f.earnings.load_for_user(USER).unwrap()[0];
    assert_eq!((earning.amount, earning.currency_code.as_str()), (dec!(100), "USD"));

    let budgets_after = f.budgets.load_for_user(USER).unwrap();
    let b1 = budgets_after.iter().find(|b| b.id == "b1").unwrap();
    assert_eq!((b1.amount, b1.currency_code.as_str()), (dec!(10), "USD"));
    let b3 = budgets_after.iter().find(|b| b.id == "b3").unwrap();
    assert_eq!((b3.amount, b3.currency_code.as_str()), (dec!(30), "USD"));

    // The default-currency switch rolled back with the records.
    assert!(f.preferences.find_preference(USER).unwrap().is_none());
}

#[tokio::test]
async fn test_explicit_redenominate_between_named_currencies() {
    let f = fixture().await;

    f.expenses.insert(new_expense("x1", dec!(92), "EUR")).await.unwrap();
    f.expenses.insert(new_expense("x2", dec!(10), "USD")).await.unwrap();

    let summary = f.service.redenominate(USER, "EUR", "USD").await.unwrap();
    assert_eq!(summary.expenses, 1);

    let expenses = f.expenses.load_for_user(USER).unwrap();
    let converted = expenses.iter().find(|e| e.id == "x1").unwrap();
    assert_eq!((converted.amount, converted.currency_code.as_str()), (dec!(100.00), "USD"));
}
