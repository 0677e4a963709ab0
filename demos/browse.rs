#[macro_use]
extern crate log;

use argh::FromArgs;

use cifs_wrapper::{CifsClient, NativeContext, SmbAuth, TargetKind};
use url::Url;

#[derive(FromArgs)]
#[argh(description = "
where positional can be: [smb://address[/share/path/]]

without a positional url, the local network is browsed for smb servers")]
struct Args {
    #[argh(option, short = 'P', description = "specify password")]
    password: Option<String>,
    #[argh(option, short = 'u', description = "specify username")]
    username: Option<String>,
    #[argh(
        option,
        short = 'w',
        default = r#""WORKGROUP".to_string()"#,
        description = "specify workgroup"
    )]
    workgroup: String,
    #[argh(
        switch,
        description = "purge cached server connections before listing"
    )]
    purge: bool,
    #[argh(positional, description = "smb url to list; omit to browse for hosts")]
    url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    assert!(env_logger::builder().try_init().is_ok());
    let args: Args = argh::from_env();
    let client = init_client(&args)?;

    match &args.url {
        None => {
            info!("browsing network for smb servers...");
            for host in client.hosts()? {
                println!("{host}");
            }
        }
        Some(url) => {
            let url = Url::parse(url)?;
            if args.purge {
                info!("purging cached server connections");
                client.purge_cached_servers();
            }
            info!("listing entries at {url}");
            for entry in client.list(&url, TargetKind::FileOrDirectory)? {
                println!("{}", entry.name);
            }
        }
    }

    Ok(())
}

fn init_client(args: &Args) -> anyhow::Result<CifsClient<NativeContext>> {
    let mut auth = SmbAuth::default().workgroup(&args.workgroup);
    if let Some(username) = &args.username {
        auth = auth.username(username);
        let password = match &args.password {
            Some(p) => p.clone(),
            None => read_secret_from_tty("Password: ")?,
        };
        auth = auth.password(password);
    }
    info!("initializing smb context");
    Ok(CifsClient::try_new(auth)?)
}

/// Read a secret from tty with customisable prompt
fn read_secret_from_tty(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}
