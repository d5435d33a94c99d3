use crate::domain::itinerary::{
    Activity, Budget, Destination, ItineraryId, ItineraryRecord, Weather,
};

/// Sample catalog shipped with the recommendations demo.
struct SampleItinerary {
    id: u32,
    name: &'static str,
    weather: Weather,
    destination: Destination,
    activities: &'static [Activity],
    budget: Budget,
    image: &'static str,
    description: &'static str,
}

impl SampleItinerary {
    fn to_record(&self) -> ItineraryRecord {
        ItineraryRecord {
            id: ItineraryId(self.id),
            name: self.name.to_string(),
            weather: self.weather,
            destination: self.destination,
            activities: self.activities.to_vec(),
            budget: self.budget,
            description: self.description.to_string(),
            image: self.image.to_string(),
        }
    }
}

pub(crate) fn sample_records() -> Vec<ItineraryRecord> {
    SAMPLE_ITINERARIES.iter().map(SampleItinerary::to_record).collect()
}

const SAMPLE_ITINERARIES: &[SampleItinerary] = &[
    SampleItinerary {
        id: 1,
        name: "Sunny Caribbean Cruise",
        weather: Weather::Tropical,
        destination: Destination::Beach,
        activities: &[Activity::Relaxation, Activity::Adventure],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/beautiful-asian-female-woman-relax-casual-leisure-peaceful-moment-cruise-deck-vacation-summer-time_609648-740.jpg?t=st=1728586030~exp=1728589630~hmac=5f9d775b140ff0e3945436a71ea99916e102878a5ef28e967804b4fe761145f7&w=1060",
        description: "Enjoy the warm sun ☀️ and beautiful beaches 🏖️ of the Caribbean.",
    },
    SampleItinerary {
        id: 2,
        name: "Alaskan Glacier Expedition",
        weather: Weather::Polar,
        destination: Destination::Mountain,
        activities: &[Activity::Wildlife, Activity::Adventure],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/couple-traveling-together-country-side_23-2149406524.jpg?t=st=1728586064~exp=1728589664~hmac=91a0dd915456e9f9c0b0471bc884da8c992af7deae017298736e1070fb346f75&w=1060",
        description: "Explore the rugged beauty of Alaska's glaciers ❄️🏔️.",
    },
    SampleItinerary {
        id: 3,
        name: "Mediterranean Cultural Tour",
        weather: Weather::Temperate,
        destination: Destination::City,
        activities: &[Activity::Cultural, Activity::Relaxation],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/mother-her-daughter-eating-harvested-olives-field_23-2147907340.jpg?t=st=1728586103~exp=1728589703~hmac=fc21a3c94e3b206e2718b7bb9bdd265fb46e377f56a92c1963940f8df8d45f17&w=1060",
        description: "Discover the rich history 🏛️ and culture 🎭 of the Mediterranean.",
    },
    SampleItinerary {
        id: 4,
        name: "African Safari Adventure",
        weather: Weather::Tropical,
        destination: Destination::Countryside,
        activities: &[Activity::Wildlife, Activity::Adventure],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/beautiful-shot-group-african-wildebeests-grassy-plain_181624-27243.jpg?t=st=1728586136~exp=1728589736~hmac=feb958d54b32c4181738e8ee8a31daeb5d4f2e8e1c1d935e59875df122f2b54e&w=1060",
        description: "Experience the thrill of a safari 🦁🐘 in the African savannah.",
    },
    SampleItinerary {
        id: 5,
        name: "Japanese Cherry Blossom Tour",
        weather: Weather::Temperate,
        destination: Destination::City,
        activities: &[Activity::Cultural, Activity::Family],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/row-cherry-blossom-tree-with-cherry-blossom-falling-petals-springtime-kyoto-japan_335224-1334.jpg?t=st=1728586179~exp=1728589779~hmac=c4a18674195aac1738342937ba82b1a521ad05822b8d625f879a728915fd6e45&w=1060",
        description: "Witness the beauty of cherry blossoms 🌸 in Japan's historic cities.",
    },
    SampleItinerary {
        id: 6,
        name: "Skiing in the Swiss Alps",
        weather: Weather::Temperate,
        destination: Destination::Mountain,
        activities: &[Activity::Sports, Activity::Relaxation],
        budget: Budget::Luxury,
        image: "https://img.freepik.com/free-photo/beautiful-view-people-cycling-skiing-across-snowy-mountains-south-tyrol-dolomites-italy_181624-29926.jpg?t=st=1728586203~exp=1728589803~hmac=2c0ebcbabe122750cd22a3abd175eb4918eb3d4964391cc9e651ebf9355013b1&w=1060",
        description: "Hit the slopes ⛷️ and enjoy the scenic beauty of the Swiss Alps 🏔️.",
    },
    SampleItinerary {
        id: 7,
        name: "Romantic Getaway in Paris",
        weather: Weather::Temperate,
        destination: Destination::City,
        activities: &[Activity::Romantic, Activity::Cultural],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/couple-browsing-smartphones-date_23-2147744393.jpg?t=st=1728586228~exp=1728589828~hmac=c5fc8c4b7ee9e2712329f6aa0b5eab5c921f7d16313b6eac2d7f22155611cbbd&w=1060",
        description: "Spend a romantic weekend exploring the City of Love ❤️🗼.",
    },
    SampleItinerary {
        id: 8,
        name: "Wellness Retreat in Bali",
        weather: Weather::Tropical,
        destination: Destination::Island,
        activities: &[Activity::Wellness, Activity::Relaxation],
        budget: Budget::Luxury,
        image: "https://img.freepik.com/free-photo/young-woman-with-body-positive-appearance-practicing-yoga-alone-deck-by-pool-tropical-island-bali-indonesia-sport-fitness-healthy-lifestyle-concept_1321-2876.jpg?t=st=1728586249~exp=1728589849~hmac=d7de6f2a422e314ee77e4d1d13e8446f237dc0e03d03e194b607793c562a18c4&w=1060",
        description: "Rejuvenate your body and soul 🧘‍♀️ at a luxurious Bali retreat.",
    },
    SampleItinerary {
        id: 9,
        name: "Antarctic Expedition Cruise",
        weather: Weather::Polar,
        destination: Destination::Island,
        activities: &[Activity::Adventure, Activity::Wildlife],
        budget: Budget::UltraLuxury,
        image: "https://img.freepik.com/free-photo/couple-traveling-together-country-side_23-2149406534.jpg?t=st=1728586313~exp=1728589913~hmac=789a525758617383757f7a1b447b8bd99383e0e483b0723fcfe539d71de91e17&w=1060",
        description: "Explore the icy wilderness of Antarctica 🐧❄️ on an expedition cruise.",
    },
    SampleItinerary {
        id: 10,
        name: "Family Fun at Disney World",
        weather: Weather::Temperate,
        destination: Destination::City,
        activities: &[Activity::Family, Activity::Entertainment],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/full-shot-friends-posing-funfair_23-2148618877.jpg?t=st=1728586340~exp=1728589940~hmac=5c972dd60628aaf5095d6b9f98795b17b35c35b9247547cc3708fca24d9db560&w=1060",
        description: "Enjoy magical moments with the whole family 👨‍👩‍👧‍👦🏰 at Disney World.",
    },
    SampleItinerary {
        id: 11,
        name: "Island Hopping in Greece",
        weather: Weather::Temperate,
        destination: Destination::Island,
        activities: &[Activity::Relaxation, Activity::Cultural],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/curly-short-haired-woman-floral-dress-boater-runs-outside_197531-24118.jpg?t=st=1728586367~exp=1728589967~hmac=166f34846ffc74a648e343b1c3cdaedee78d946ac6ba2f6d7f27402299e17096&w=1060",
        description: "Discover the beauty of Greek islands 🏝️ and their rich history 🏛️.",
    },
    SampleItinerary {
        id: 12,
        name: "Australian Outback Adventure",
        weather: Weather::Temperate,
        destination: Destination::Countryside,
        activities: &[Activity::Adventure, Activity::Wildlife],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/sideways-woman-man-waving-each-other-coast_23-2148699842.jpg?t=st=1728586391~exp=1728589991~hmac=4eeb54923ae0c8f006e5605a67ec541dc0bf3c463286afadd2e57d7460b2f95c&w=1060",
        description: "Experience the rugged terrain and unique wildlife 🦘🐨 of the Outback.",
    },
    SampleItinerary {
        id: 13,
        name: "Luxury Nile River Cruise",
        weather: Weather::Tropical,
        destination: Destination::City,
        activities: &[Activity::Cultural, Activity::Relaxation],
        budget: Budget::Luxury,
        image: "https://img.freepik.com/free-photo/dubai-creek_158595-1992.jpg?t=st=1728586419~exp=1728590019~hmac=6bba3729c093988d6f0145b1218e8ab81769f8893502c59585f8ff4ada5fbe51&w=1060",
        description: "Sail along the Nile 🚢 and explore ancient Egyptian wonders 🐪🏺.",
    },
    SampleItinerary {
        id: 14,
        name: "Wellness Spa in the Himalayas",
        weather: Weather::Temperate,
        destination: Destination::Mountain,
        activities: &[Activity::Wellness, Activity::Relaxation],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/person-practicing-cold-exposure-metabolism_23-2150981869.jpg?t=st=1728586439~exp=1728590039~hmac=fa05e3f31d865cd61a73b94024d3154820de644e1101b383d72d11e1ae483b82&w=1060",
        description: "Find peace at a spa retreat 🧘‍♂️ nestled in the Himalayas 🏔️.",
    },
    SampleItinerary {
        id: 15,
        name: "Wine Tasting in Tuscany",
        weather: Weather::Temperate,
        destination: Destination::Countryside,
        activities: &[Activity::Cultural, Activity::Relaxation],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/low-angle-happy-friends-partying-outdoors_23-2149412443.jpg?t=st=1728586466~exp=1728590066~hmac=41ea894916a7aa2cde3abe55e96722eb1d2b50514552128803f0d14b7090daf7&w=1060",
        description: "Indulge in fine wines 🍷 and picturesque landscapes 🌄 in Tuscany.",
    },
    SampleItinerary {
        id: 16,
        name: "Exploring the Amazon Rainforest",
        weather: Weather::Tropical,
        destination: Destination::Countryside,
        activities: &[Activity::Adventure, Activity::Wildlife],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/young-traveler_1150-5651.jpg?t=st=1728586488~exp=1728590088~hmac=da09e8b99f9b4176272fedb77ff1e44b16b19aec133f06a7e7b7665c9e3920be&w=1060",
        description: "Dive into the heart of the Amazon 🌴 and its diverse ecosystem 🐒🦜.",
    },
    SampleItinerary {
        id: 17,
        name: "Northern Lights in Iceland",
        weather: Weather::Polar,
        destination: Destination::Countryside,
        activities: &[Activity::Adventure, Activity::Romantic],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/beautiful-aurora-borealis-sky-iceland-spectacular-green-violet-northern-lights-appearing-night-creating-panoramic-landscape-glowing-magical-natural-phenomenon-starry-sky_482257-69775.jpg?t=st=1728586508~exp=1728590108~hmac=bd9c9198ed1575ccd2f2e5de5765d519ae0e4fcc72cfb6b748117b2536f2d038&w=1060",
        description: "Witness the breathtaking Northern Lights 🌠 in Iceland.",
    },
    SampleItinerary {
        id: 18,
        name: "Yoga Retreat in Costa Rica",
        weather: Weather::Tropical,
        destination: Destination::Beach,
        activities: &[Activity::Wellness, Activity::Relaxation],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/side-view-woman-doing-yoga-nature-with-copy-space_23-2148769597.jpg?t=st=1728586527~exp=1728590127~hmac=f8024676c2f6afd27fe310c854a170835ea6edd2d2bbd7af02dc839efc52975a&w=1060",
        description: "Rebalance with yoga sessions 🧘‍♀️ on Costa Rica's serene beaches 🏖️.",
    },
    SampleItinerary {
        id: 19,
        name: "Historical Tour of Rome",
        weather: Weather::Temperate,
        destination: Destination::City,
        activities: &[Activity::Cultural, Activity::Family],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/couple-honeymoon-venice_1303-5723.jpg?t=st=1728586552~exp=1728590152~hmac=e84cdb3be4cdeed6828a13f38d7fe20bb89e4d6f93f913e3424ad1df5bfefd65&w=1060",
        description: "Explore ancient ruins 🏛️ and art 🎨 in the heart of Rome.",
    },
    SampleItinerary {
        id: 20,
        name: "Beach Party in Ibiza",
        weather: Weather::Temperate,
        destination: Destination::Beach,
        activities: &[Activity::Entertainment, Activity::Sports],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/medium-shot-friends-partying-outdoors_23-2149646131.jpg?t=st=1728586575~exp=1728590175~hmac=5944ce04045e762ef353cd594dc332ea88de42251f248a3b7fc43123557c9fd9&w=1060",
        description: "Enjoy vibrant nightlife 🎉 and water sports 🏄‍♂️ on Ibiza's beaches.",
    },
    SampleItinerary {
        id: 21,
        name: "Cycling Tour of the Netherlands",
        weather: Weather::Temperate,
        destination: Destination::Countryside,
        activities: &[Activity::Sports, Activity::Cultural],
        budget: Budget::Economy,
        image: "https://img.freepik.com/free-photo/transport-concept-with-people-bicycles_23-2148959676.jpg?t=st=1728586602~exp=1728590202~hmac=caef57fc727d3e91ca3a97a9e5f55184959886f8c891c03b6187eee3aa906bac&w=1060",
        description: "Cycle through picturesque landscapes 🚲 and historic towns 🏘️.",
    },
    SampleItinerary {
        id: 22,
        name: "Wildlife Expedition in Madagascar",
        weather: Weather::Tropical,
        destination: Destination::Island,
        activities: &[Activity::Wildlife, Activity::Adventure],
        budget: Budget::Standard,
        image: "https://img.freepik.com/free-photo/beautiful-cheetah-standing-big-branch_181624-18632.jpg?t=st=1728586632~exp=1728590232~hmac=b65cefeac7a230ed709c0b1c5f2b2f09bbaa0fe55247801a2f5548d9f11cf473&w=1060",
        description: "Discover unique species 🦎 on an island like no other 🏝️.",
    },
    SampleItinerary {
        id: 23,
        name: "Cultural Immersion in India",
        weather: Weather::Tropical,
        destination: Destination::City,
        activities: &[Activity::Cultural, Activity::Family],
        budget: Budget::Economy,
        image: "https://img.freepik.com/free-photo/man-teaching-children-about-culture-medium-shot_1258-289380.jpg?t=st=1728586649~exp=1728590249~hmac=feb8f1237c81dc1894af507d84d206ac233b8d77e476c0f407ca60598cb69f48&w=1060",
        description: "Experience the diverse cultures and traditions of India 🕌🛕.",
    },
    SampleItinerary {
        id: 24,
        name: "Scandinavian Fjord Cruise",
        weather: Weather::Temperate,
        destination: Destination::Mountain,
        activities: &[Activity::Relaxation, Activity::Adventure],
        budget: Budget::Premium,
        image: "https://img.freepik.com/free-photo/cruise-ship-sea-with-mountains_23-2148153636.jpg?t=st=1728586672~exp=1728590272~hmac=64b331cd86567a33ea6a1089b02e8d1919c7d7692d1c684e984dcf3173560c0c&w=1060",
        description: "Sail through majestic fjords ⛰️ and enjoy stunning landscapes 🚢.",
    },
    SampleItinerary {
        id: 25,
        name: "Desert Safari in Dubai",
        weather: Weather::Tropical,
        destination: Destination::Countryside,
        activities: &[Activity::Adventure, Activity::Entertainment],
        budget: Budget::Luxury,
        image: "https://img.freepik.com/free-photo/traveling-with-off-road-car_23-2151472970.jpg?t=st=1728586692~exp=1728590292~hmac=c1cb70d1f336224a7eec1d2aabd751f1647a513d0409a05bb3a68268e7761ba1&w=1060",
        description: "Experience dune bashing 🏜️ and cultural shows 🐪 in the desert.",
    },
];
