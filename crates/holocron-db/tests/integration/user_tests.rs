use holocron_core::AppError;
use holocron_core::models::NewUser;
use holocron_core::traits::UserStore;

use crate::integration::common::setup_test_db;

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.into(),
        email: email.into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
    }
}

#[tokio::test]
async fn create_and_find_user() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();

    let created = repo
        .create(&new_user("luke", "luke@tatooine.net"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let by_name = repo
        .find_by_username("luke")
        .await
        .unwrap()
        .expect("Should find the user by username");
    assert_eq!(by_name, created);

    let by_email = repo
        .find_by_email("luke@tatooine.net")
        .await
        .unwrap()
        .expect("Should find the user by email");
    assert_eq!(by_email.id, created.id);
}

#[tokio::test]
async fn missing_user_is_none() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();

    assert!(repo.find_by_username("jabba").await.unwrap().is_none());
    assert!(repo.find_by_email("jabba@hutt.org").await.unwrap().is_none());
}

#[tokio::test]
async fn unique_username_enforced_by_schema() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();
    repo.create(&new_user("luke", "luke@tatooine.net"))
        .await
        .unwrap();

    let err = repo
        .create(&new_user("luke", "other@tatooine.net"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref m) if m == "Username already exists"));
}

#[tokio::test]
async fn unique_email_enforced_by_schema() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();
    repo.create(&new_user("luke", "luke@tatooine.net"))
        .await
        .unwrap();

    let err = repo
        .create(&new_user("biggs", "luke@tatooine.net"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref m) if m == "Email already exists"));
}

#[tokio::test]
async fn overlong_username_is_validation_error() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();

    let err = repo
        .create(&new_user(&"x".repeat(101), "long@tatooine.net"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}
