mod common;

use common::TestApp;
use finance_tracker::client::{format, ClientError, FinanceClient, LocalList};
use tokio::net::TcpListener;

async fn spawn_server(app: &TestApp) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_account_flow_through_client() {
    let app = TestApp::new().await;
    let mut client = FinanceClient::new(spawn_server(&app).await);

    let user = client.register("ana", "pw1").await.unwrap();
    assert_eq!(user.username, "ana");

    let err = client.register("ana", "pw2").await.unwrap_err();
    assert_eq!(err.status(), Some(409));

    let err = client.login("ana", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, .. }));
    assert!(client.current_user().is_none());

    let identity = client.login("ana", "pw1").await.unwrap();
    assert_eq!(identity.id, user.id);
    assert_eq!(client.current_user(), Some(&identity));

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);

    client.logout();
    assert!(client.current_user().is_none());
}

#[tokio::test]
async fn test_expense_screen_flow() {
    let app = TestApp::new().await;
    let client = FinanceClient::new(spawn_server(&app).await);
    let user = client.register("ana", "pw1").await.unwrap();

    let categories = client.list_categories(user.id).await.unwrap();
    let food = categories.iter().find(|c| c.name == "Comida").unwrap();

    let mut expenses = LocalList::new();
    expenses.replace_all(client.list_expenses(user.id).await.unwrap());
    assert!(expenses.is_empty());

    let first = client.create_expense(user.id, "Café", 12.5, Some(food.id)).await.unwrap();
    expenses.merge_dated(first.clone());
    let second = client.create_expense(user.id, "Pan", 3.0, None).await.unwrap();
    expenses.merge_dated(second.clone());
    assert_eq!(expenses.items()[0].id, second.id);
    assert_eq!(format::format_expense_amount(first.amount), "-$12.50");

    let edited = client.update_expense(&first.id, "Café doble", 15.0, Some(food.id)).await.unwrap();
    expenses.merge_dated(edited);
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses.get(&first.id).unwrap().description, "Café doble");

    let deleted = client.delete_expense(&second.id).await.unwrap();
    assert_eq!(deleted.id_borrado, second.id);
    expenses.remove(&second.id);

    expenses.replace_all(client.list_expenses(user.id).await.unwrap());
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses.items()[0].category_name.as_deref(), Some("Comida"));

    let err = client.create_expense(user.id, "", 1.0, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 400, ref message } if message.contains("descripcion")));
}

#[tokio::test]
async fn test_income_and_category_calls() {
    let app = TestApp::new().await;
    let client = FinanceClient::new(spawn_server(&app).await);
    let user = client.register("ana", "pw1").await.unwrap();

    let income = client.create_income(user.id, "Salario", 1200.0).await.unwrap();
    let income = client.update_income(&income.id, "Salario", 1250.0).await.unwrap();
    assert_eq!(format::format_income_amount(income.amount), "+$1250.00");
    assert_eq!(client.list_incomes(user.id).await.unwrap().len(), 1);
    assert_eq!(client.delete_income(&income.id).await.unwrap().id_eliminado, income.id);

    let cat = client.create_category(user.id, "Mascotas").await.unwrap();
    let cat = client.update_category(cat.id, user.id, "Perros").await.unwrap();
    assert_eq!(cat.name, "Perros");
    client.delete_category(cat.id).await.unwrap();
    assert_eq!(client.list_categories(user.id).await.unwrap().len(), 11);
}

#[tokio::test]
async fn test_goal_contributions_through_client() {
    let app = TestApp::new().await;
    let client = FinanceClient::new(spawn_server(&app).await);
    let user = client.register("ana", "pw1").await.unwrap();

    let goal = client.create_goal(user.id, "Viaje", 1000.0, Some(0.0), None).await.unwrap();
    let mut goals = LocalList::new();
    goals.replace_all(client.list_goals(user.id).await.unwrap());

    let updated = client.contribute_to_goal(&mut goals, &goal.id, 0.1).await.unwrap();
    let updated_again = client.contribute_to_goal(&mut goals, &goal.id, 0.2).await.unwrap();
    assert_eq!(updated.current_amount, 0.1);
    assert_eq!(updated_again.current_amount, 0.3);
    assert_eq!(goals.get(&goal.id).unwrap().current_amount, 0.3);

    let atomic = client.contribute_to_goal_atomic(&goal.id, 99.7).await.unwrap();
    assert!((atomic.current_amount - 100.0).abs() < 1e-9);
    goals.upsert(atomic.clone());
    assert_eq!(format::format_percent(format::goal_progress(&atomic)), "10.0%");

    let mut done = atomic.clone();
    done.current_amount = 1000.0;
    done.completed = 1;
    let done = client.update_goal(&done).await.unwrap();
    assert_eq!(done.completed, 1);

    let listed = client.list_goals(user.id).await.unwrap();
    assert_eq!(listed[0].current_amount, 1000.0);

    client.delete_goal(&goal.id).await.unwrap();
    let err = client.contribute_to_goal_atomic(&goal.id, 5.0).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}
