// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use newsposter::client::{ClientError, PostClient, DEFAULT_API_URL};

/// 命令行客户端
///
/// 用法：`newsposter-client <topic...>`，服务地址取自 `NEWSPOSTER_API_URL`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let topic = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let api_url =
        std::env::var("NEWSPOSTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let client = PostClient::new(&api_url)?;
    match client.get_post(&topic).await {
        Ok(post) => {
            println!("LinkedIn Post\n=============\n");
            println!("{}\n", post.linkedin_post);
            println!("News Sources\n============");
            for url in &post.news_sources {
                println!("- {}", url);
            }
            Ok(())
        }
        Err(ClientError::Api { status, detail }) => {
            eprintln!("error ({}): {}", status, detail);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
