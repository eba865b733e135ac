use std::{net::SocketAddr, process::exit};

use axum::{Json, Router, routing::get};
use clap::Parser;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use gofinances_dashboard::TRANSACTIONS_RESOURCE;

/// A stand-in transactions API with sample data for trying out the dashboard locally.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3333)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().pretty().init();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let router = Router::new().route(&format!("/{TRANSACTIONS_RESOURCE}"), get(get_transactions));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!("Could not bind to {addr}: {error}");
            exit(1);
        }
    };

    tracing::info!("Mock transactions API listening on {}", addr);
    if let Err(error) = axum::serve(listener, router).await {
        tracing::error!("Mock API stopped unexpectedly: {error}");
        exit(1);
    }
}

async fn get_transactions() -> Json<Value> {
    tracing::debug!("Serving sample transactions");

    Json(sample_transactions())
}

fn sample_transactions() -> Value {
    json!({
        "transactions": [
            {
                "id": "1",
                "title": "Desenvolvimento de site",
                "value": 12000,
                "type": "income",
                "category": { "title": "Vendas" },
                "created_at": "2021-04-13T10:00:00Z"
            },
            {
                "id": "2",
                "title": "Hamburguer",
                "value": 59,
                "type": "outcome",
                "category": { "title": "Alimentação" },
                "created_at": "2021-04-10T19:30:00Z"
            },
            {
                "id": "3",
                "title": "Aluguel do apartamento",
                "value": 1200,
                "type": "outcome",
                "category": { "title": "Casa" },
                "created_at": "2021-03-27T12:00:00Z"
            },
            {
                "id": "4",
                "title": "Computador",
                "value": 5400,
                "type": "income",
                "category": { "title": "Vendas" },
                "created_at": "2021-03-15T09:15:00Z"
            }
        ],
        "balance": {
            "income": "17400",
            "outcome": "1259",
            "total": "16141"
        }
    })
}
