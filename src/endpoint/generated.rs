// Snapshot of the GET paths in https://www.torn.com/swagger/openapi.json.
// Not exhaustive; regenerate with `torn-fetch schema -o src/endpoint/generated.rs`.

endpoints! {
    Faction => "/faction", None;
    FactionApplications => "/faction/applications", Some("FactionApplicationsResponse");
    FactionAttacks => "/faction/attacks", Some("FactionAttacksResponse");
    FactionAttacksfull => "/faction/attacksfull", Some("FactionAttacksFullResponse");
    FactionBalance => "/faction/balance", Some("FactionBalanceResponse");
    FactionBasic => "/faction/basic", Some("FactionBasicResponse");
    FactionChain => "/faction/chain", Some("FactionOngoingChainResponse");
    FactionChainreport => "/faction/chainreport", Some("FactionChainReportResponse");
    FactionChains => "/faction/chains", Some("FactionChainsResponse");
    FactionCrimes => "/faction/crimes", Some("FactionCrimesResponse");
    FactionHof => "/faction/hof", Some("FactionHofResponse");
    FactionMembers => "/faction/members", Some("FactionMembersResponse");
    FactionNews => "/faction/news", Some("FactionNewsResponse");
    FactionRankedwars => "/faction/rankedwars", Some("FactionRankedWarResponse");
    FactionSearch => "/faction/search", Some("FactionSearchResponse");
    FactionTerritory => "/faction/territory", Some("FactionTerritoriesResponse");
    FactionWars => "/faction/wars", Some("FactionWarsResponse");
    FactionChainIdChainreport => "/faction/{chainId}/chainreport", Some("FactionChainReportResponse");
    FactionCrimeIdCrime => "/faction/{crimeId}/crime", Some("FactionCrimeResponse");
    FactionId => "/faction/{id}", None;
    FactionIdBasic => "/faction/{id}/basic", Some("FactionBasicResponse");
    FactionIdChain => "/faction/{id}/chain", Some("FactionOngoingChainResponse");
    FactionIdChains => "/faction/{id}/chains", Some("FactionChainsResponse");
    FactionIdHof => "/faction/{id}/hof", Some("FactionHofResponse");
    FactionIdMembers => "/faction/{id}/members", Some("FactionMembersResponse");
    FactionIdRankedwars => "/faction/{id}/rankedwars", Some("FactionRankedWarResponse");
    FactionIdWars => "/faction/{id}/wars", Some("FactionWarsResponse");
    Forum => "/forum", None;
    ForumCategories => "/forum/categories", Some("ForumCategoriesResponse");
    ForumThreadIdPosts => "/forum/{threadId}/posts", Some("ForumPostsResponse");
    ForumThreadIdThread => "/forum/{threadId}/thread", Some("ForumThreadResponse");
    Key => "/key", None;
    KeyInfo => "/key/info", Some("KeyInfoResponse");
    KeyLog => "/key/log", Some("KeyLogResponse");
    Market => "/market", None;
    MarketBazaar => "/market/bazaar", Some("BazaarResponse");
    MarketId => "/market/{id}", None;
    MarketIdItemmarket => "/market/{id}/itemmarket", Some("MarketItemMarketResponse");
    Property => "/property", None;
    PropertyId => "/property/{id}", None;
    Racing => "/racing", None;
    RacingCars => "/racing/cars", Some("RacingCarsResponse");
    RacingTracks => "/racing/tracks", Some("RacingTracksResponse");
    Torn => "/torn", None;
    TornCalendar => "/torn/calendar", Some("TornCalendarResponse");
    TornItems => "/torn/items", Some("TornItemsResponse");
    TornTimestamp => "/torn/timestamp", Some("TimestampResponse");
    TornIdsItems => "/torn/{ids}/items", Some("TornItemsResponse");
    User => "/user", None;
    UserAttacks => "/user/attacks", Some("AttacksResponse");
    UserAttacksfull => "/user/attacksfull", Some("AttacksFullResponse");
    UserBars => "/user/bars", Some("UserBarsResponse");
    UserBasic => "/user/basic", Some("UserBasicResponse");
    UserBattlestats => "/user/battlestats", Some("UserBattleStatsResponse");
    UserCooldowns => "/user/cooldowns", Some("UserCooldownsResponse");
    UserFaction => "/user/faction", Some("UserFactionResponse");
    UserMoney => "/user/money", Some("UserMoneyResponse");
    UserProfile => "/user/profile", Some("UserProfileResponse");
    UserProperties => "/user/properties", Some("UserPropertiesResponse");
    UserId => "/user/{id}", None;
    UserIdBasic => "/user/{id}/basic", Some("UserBasicResponse");
    UserIdFaction => "/user/{id}/faction", Some("UserFactionResponse");
    UserIdProfile => "/user/{id}/profile", Some("UserProfileResponse");
}
