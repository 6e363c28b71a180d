use remindme_api::Application;
use remindme_infra::setup_context;
use remindme_sdk::RemindmeSDK;

// Launch the application as a background task
pub async fn spawn_app() -> (RemindmeSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = RemindmeSDK::new(address.clone());
    (sdk, address)
}
