//! Command line client for the 6 cities rental listings.
//!
//! ```bash
//! six-cities offers --city Amsterdam --sort price-asc
//! six-cities login --email me@example.com --password secret1
//! six-cities favorite <offer-id>
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use six_cities::api::ApiClient;
use six_cities::config::Config;
use six_cities::logging::init_tracing;
use six_cities::models::{AuthCredentials, CityName, CommentDraft, Offer, SortType};
use six_cities::store::selectors::{
    favorite_toggle_for, select_favorite_count, select_favorites_by_city, select_nearby_preview,
    select_offer, select_offer_images, select_review_list, select_user, CityOffersSelector,
};
use six_cities::store::{Action, AsyncActions, Dispatch, OfferPageLoad, Store};
use six_cities::token::{FileTokenStore, TokenStore};
use six_cities::utils::rating_percent;

#[derive(Parser)]
#[command(name = "six-cities")]
#[command(version)]
#[command(about = "Browse and bookmark rental offers in six European cities")]
struct Cli {
    /// Config file (default: <config_dir>/six-cities/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List offers of one city
    Offers {
        #[arg(long, default_value_t = CityName::default(), value_parser = parse_city)]
        city: CityName,

        /// popular, price-asc, price-desc or top-rated
        #[arg(long, default_value_t = SortType::default(), value_parser = parse_sort)]
        sort: SortType,
    },

    /// Show one offer with its reviews and neighbours
    Offer { id: String },

    /// List bookmarked offers grouped by city
    Favorites,

    /// Bookmark an offer
    Favorite {
        id: String,

        /// Remove the bookmark instead
        #[arg(long)]
        remove: bool,
    },

    /// List reviews of an offer, newest first
    Comments { id: String },

    /// Post a review
    Comment {
        id: String,

        #[arg(long)]
        rating: u8,

        #[arg(long)]
        text: String,
    },

    /// Sign in and keep the session token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and forget the session token
    Logout,

    /// Show the signed-in user
    Whoami,
}

fn parse_city(s: &str) -> Result<CityName, String> {
    CityName::parse(s).ok_or_else(|| format!("unknown city '{}'", s))
}

fn parse_sort(s: &str) -> Result<SortType, String> {
    SortType::parse(s).ok_or_else(|| format!("unknown sort type '{}'", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.storage.token_path()));
    let client = ApiClient::new(&config.api, Arc::clone(&tokens))
        .context("Failed to build HTTP client")?;

    let store = Arc::new(Store::new());
    store.subscribe(|action, _| {
        if let Action::RedirectToRoute(route) = action {
            tracing::info!(route = %route, "Redirect");
        }
    });

    let actions = AsyncActions::new(client, tokens, Arc::clone(&store) as Arc<dyn Dispatch>);
    let status = actions.bootstrap().await;
    tracing::debug!(?status, "Bootstrap finished");

    match cli.command {
        Commands::Offers { city, sort } => {
            store.dispatch(Action::ChangeLocation(city));
            store.dispatch(Action::ChangeSortType(sort));

            let offers = CityOffersSelector::new().select(&store.state());
            println!("{} places to stay in {} ({})", offers.len(), city, sort);
            for offer in offers.iter() {
                print_offer_line(offer);
            }
        }
        Commands::Offer { id } => {
            match actions.load_offer_page(&store.state(), &id).await {
                OfferPageLoad::NotReady => bail!("Offers are not loaded, try again"),
                OfferPageLoad::NotFound => bail!("Offer '{}' not found", id),
                OfferPageLoad::Loaded => {}
            }

            let state = store.state();
            let Some(offer) = select_offer(&state) else {
                bail!("Offer '{}' could not be loaded", id);
            };

            println!("{}{}", if offer.is_premium { "[Premium] " } else { "" }, offer.title);
            println!(
                "{} · {} · €{} night · rating {}",
                offer.offer_type.label(),
                offer.city.name,
                offer.price,
                rating_percent(offer.rating)
            );
            println!(
                "{} bedrooms · max {} adults · host {}{}",
                offer.bedrooms,
                offer.max_adults,
                offer.host.name,
                if offer.host.is_pro { " (Pro)" } else { "" }
            );
            println!("\n{}", offer.description);
            if !offer.goods.is_empty() {
                println!("\nInside: {}", offer.goods.join(", "));
            }
            for image in select_offer_images(&state) {
                println!("  image: {}", image);
            }

            let reviews = select_review_list(&state);
            println!("\nReviews · {}", state.comments.comments.len());
            for review in reviews {
                println!("  {} ({}) {}: {}", review.date, review.rating, review.user.name, review.comment);
            }

            println!("\nOther places in the neighbourhood");
            for nearby in select_nearby_preview(&state) {
                print_offer_line(nearby);
            }
        }
        Commands::Favorites => {
            let state = store.state();
            if select_user(&state).is_none() {
                bail!("Sign in to see your favorites");
            }
            println!("Saved listing · {}", select_favorite_count(&state));
            for (city, offers) in select_favorites_by_city(&state) {
                println!("{}", city);
                for offer in &offers {
                    print_offer_line(offer);
                }
            }
        }
        Commands::Favorite { id, remove } => {
            let update = match favorite_toggle_for(&store.state(), &id, remove) {
                Ok(update) => update,
                Err(route) => bail!("Sign in first ({})", route),
            };
            let offer = actions.update_favorite_offer(update).await?;
            println!(
                "{} {}",
                if offer.is_favorite { "Bookmarked" } else { "Removed bookmark of" },
                offer.title
            );
        }
        Commands::Comments { id } => {
            actions.get_comments(&id).await?;
            let state = store.state();
            for review in select_review_list(&state) {
                println!("{} ({}) {}: {}", review.date, review.rating, review.user.name, review.comment);
            }
        }
        Commands::Comment { id, rating, text } => {
            let draft = CommentDraft {
                offer_id: id,
                rating,
                comment: text,
            };
            // Form rules are checked here, before anything is sent.
            draft.validate()?;
            let comments = actions.create_comment(draft).await?;
            println!("Review posted, {} reviews received", comments.len());
        }
        Commands::Login { email, password } => {
            let info = actions.login(AuthCredentials { email, password }).await?;
            println!("Signed in as {}", info.email);
        }
        Commands::Logout => {
            actions.logout().await?;
            println!("Signed out");
        }
        Commands::Whoami => match select_user(&store.state()) {
            Some(user) => println!("{} <{}>{}", user.name, user.email, if user.is_pro { " Pro" } else { "" }),
            None => println!("Not signed in"),
        },
    }

    Ok(())
}

fn print_offer_line(offer: &Offer) {
    println!(
        "  {:<38} {}{:<40} €{:<5} {:<5} {}",
        offer.id,
        if offer.is_favorite { "★ " } else { "  " },
        offer.title,
        offer.price,
        rating_percent(offer.rating),
        offer.offer_type.label()
    );
}
